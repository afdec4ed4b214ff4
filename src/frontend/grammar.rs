use super::span::Span;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterEq,
    LessThan,
    LessEq,
    And,
    Or,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Stmt {
    pub stmt: StmtType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum StmtType {
    Expression(Expr),
    Assignment(Identifier, Expr),
    /// Values printed back to back, then the terminator.
    Print(Vec<Expr>, Expr),
    IfElse(Expr, Vec<Stmt>, Option<Vec<Stmt>>),
    While(Expr, Vec<Stmt>),
    /// Initializer, condition, update and body.
    For(Box<Stmt>, Expr, Box<Stmt>, Vec<Stmt>),
    PostfixUpdate(Identifier, UpdateOperator),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Expr {
    pub expr: ExprType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExprType {
    Literal(Literal),
    Variable(Identifier),
    Binary(BinaryOperator, Box<Expr>, Box<Expr>),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    Boolean(bool),
    Str(String),
    None,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::EqualTo => "==",
            BinaryOperator::NotEqualTo => "!=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterEq => ">=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessEq => "<=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }
}

impl UpdateOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }

    /// Amount added to the variable.
    pub fn delta(&self) -> f64 {
        match self {
            UpdateOperator::Increment => 1.0,
            UpdateOperator::Decrement => -1.0,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Identifier {
    pub fn new(name: String, span: Span) -> Self {
        Self { name, span }
    }
}

impl Stmt {
    pub fn new(stmt: StmtType, span: Span) -> Self {
        Stmt { stmt, span }
    }

    pub fn ast_string(&self) -> String {
        match &self.stmt {
            StmtType::Expression(expr) => expr.ast_string(),
            StmtType::Assignment(var, expr) => format!("(set {} {})", var.name, expr.ast_string()),
            StmtType::Print(exprs, terminator) => {
                let exprs: Vec<_> = exprs.iter().map(|e| e.ast_string()).collect();
                format!(
                    "(print {} :end {})",
                    exprs.join(" "),
                    terminator.ast_string()
                )
            }
            StmtType::IfElse(condition, if_body, else_body) => {
                let mut rendered =
                    format!("(if {} {}", condition.ast_string(), block_string(if_body));
                if let Some(else_body) = else_body {
                    rendered.push(' ');
                    rendered.push_str(&block_string(else_body));
                }
                rendered.push(')');
                rendered
            }
            StmtType::While(condition, body) => {
                format!("(while {} {})", condition.ast_string(), block_string(body))
            }
            StmtType::For(init, condition, update, body) => format!(
                "(for {} {} {} {})",
                init.ast_string(),
                condition.ast_string(),
                update.ast_string(),
                block_string(body)
            ),
            StmtType::PostfixUpdate(var, op) => format!("({} {})", op.symbol(), var.name),
        }
    }
}

fn block_string(stmts: &[Stmt]) -> String {
    let stmts: Vec<_> = stmts.iter().map(|s| s.ast_string()).collect();
    format!("{{{}}}", stmts.join(" "))
}

impl Expr {
    pub fn new(expr: ExprType, span: Span) -> Self {
        Expr { expr, span }
    }

    pub fn ast_string(&self) -> String {
        match &self.expr {
            ExprType::Literal(l) => match l {
                Literal::Number(n) => n.to_string(),
                Literal::Boolean(b) => b.to_string(),
                Literal::Str(s) => format!("{:?}", s),
                Literal::None => "none".to_owned(),
            },
            ExprType::Variable(var) => var.name.clone(),
            ExprType::Binary(op, lhs, rhs) => format!(
                "({} {} {})",
                op.symbol(),
                lhs.ast_string(),
                rhs.ast_string()
            ),
        }
    }
}

impl Program {
    pub fn ast_string(&self) -> String {
        let stmts: Vec<_> = self.stmts.iter().map(|s| s.ast_string()).collect();
        stmts.join("\n")
    }
}
