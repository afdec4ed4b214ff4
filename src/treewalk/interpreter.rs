use super::environment::Environment;
use super::errors::{InterpreterError, RuntimeResult};
use super::operations::eval_binary;
use super::value::Value;
use crate::frontend::grammar::{Expr, ExprType, Identifier, Program, Stmt, StmtType, UpdateOperator};

/// Tree-walking evaluator. Owns the variable table and the output of one run.
#[derive(Debug, Default)]
pub struct Interpreter {
    env: Environment,
    output: String,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            output: String::new(),
        }
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn eval_program(&mut self, program: &Program) -> RuntimeResult<()> {
        self.eval_statements(&program.stmts)
    }

    pub fn eval_statements(&mut self, stmts: &[Stmt]) -> RuntimeResult<()> {
        for stmt in stmts.iter() {
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        #[cfg(feature = "trace-execution")]
        log::trace!("{} | {}", stmt.span.start_pos, stmt.ast_string());

        match &stmt.stmt {
            StmtType::Expression(expr) => {
                self.eval_expression(expr)?;
            }
            StmtType::Assignment(ident, expr) => {
                let value = self.eval_expression(expr)?;
                self.env.define(ident.name.clone(), value);
            }
            StmtType::Print(exprs, terminator) => self.eval_print(exprs, terminator)?,
            StmtType::IfElse(condition, if_body, else_body) => {
                self.eval_if_else(condition, if_body, else_body.as_deref())?
            }
            StmtType::While(condition, body) => self.eval_while(condition, body)?,
            StmtType::For(init, condition, update, body) => {
                self.eval_for(init, condition, update, body)?
            }
            StmtType::PostfixUpdate(ident, op) => self.eval_update(ident, *op)?,
        }

        Ok(())
    }

    /// Renders the whole line first so a failing expression prints nothing.
    fn eval_print(&mut self, exprs: &[Expr], terminator: &Expr) -> RuntimeResult<()> {
        let mut line = String::new();
        for expr in exprs.iter() {
            line.push_str(&self.eval_expression(expr)?.to_string());
        }
        line.push_str(&self.eval_expression(terminator)?.to_string());

        self.output.push_str(&line);
        Ok(())
    }

    fn eval_if_else(
        &mut self,
        condition: &Expr,
        if_body: &[Stmt],
        else_body: Option<&[Stmt]>,
    ) -> RuntimeResult<()> {
        if self.eval_expression(condition)?.is_truthy() {
            self.eval_statements(if_body)
        } else if let Some(else_body) = else_body {
            self.eval_statements(else_body)
        } else {
            Ok(())
        }
    }

    fn eval_while(&mut self, condition: &Expr, body: &[Stmt]) -> RuntimeResult<()> {
        while self.eval_expression(condition)?.is_truthy() {
            self.eval_statements(body)?;
        }
        Ok(())
    }

    fn eval_for(
        &mut self,
        init: &Stmt,
        condition: &Expr,
        update: &Stmt,
        body: &[Stmt],
    ) -> RuntimeResult<()> {
        self.eval_statement(init)?;
        while self.eval_expression(condition)?.is_truthy() {
            self.eval_statements(body)?;
            self.eval_statement(update)?;
        }
        Ok(())
    }

    fn eval_update(&mut self, ident: &Identifier, op: UpdateOperator) -> RuntimeResult<()> {
        let current = match self.env.lookup(&ident.name) {
            Some(Value::Number(n)) => *n,
            other => {
                return Err(InterpreterError::IllegalUpdate {
                    op,
                    name: ident.name.clone(),
                    kind: other.map(Value::kind),
                })
            }
        };

        self.env
            .define(ident.name.clone(), Value::Number(current + op.delta()));
        Ok(())
    }

    /// Both operands of every binary operator are evaluated, `and`/`or` included.
    ///
    /// The left spine is walked in a loop, so a long flat chain such as
    /// `1 + 1 + ... + 1` takes constant stack.
    pub fn eval_expression(&self, expr: &Expr) -> RuntimeResult<Value> {
        let mut pending = Vec::new();
        let mut leftmost = expr;
        let mut value = loop {
            match &leftmost.expr {
                ExprType::Literal(literal) => break Value::from(literal),
                ExprType::Variable(ident) => break self.env.get(&ident.name)?,
                ExprType::Binary(op, lhs, rhs) => {
                    pending.push((*op, rhs.as_ref()));
                    leftmost = lhs.as_ref();
                }
            }
        };

        for (op, rhs) in pending.into_iter().rev() {
            let rhs = self.eval_expression(rhs)?;
            value = eval_binary(op, value, rhs)?;
        }
        Ok(value)
    }
}
