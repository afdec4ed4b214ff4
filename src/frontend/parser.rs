use super::errors::{Item, LexError, ParserError, ParserResult};
use super::grammar::{
    BinaryOperator, Expr, ExprType, Identifier, Literal, Program, Stmt, StmtType, UpdateOperator,
};
use super::lexer::Lexer;
use super::parser_utils::Precedence;
use super::span::Span;
use super::token::{SpannedToken, Token};

const DEFAULT_TERMINATOR: &str = "\n";

/// Recursive descent parser that pulls tokens lazily from its lexer.
///
/// Keeps the current token plus one token of pre-fetch, which is what tells
/// `x = 1;`, `x++;` and `x;` apart.
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    previous: SpannedToken,
    current: SpannedToken,
    next: SpannedToken,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        let placeholder = SpannedToken {
            token: Token::EndOfFile,
            span: Span::default(),
        };

        Parser {
            lexer: Lexer::new(source),
            previous: placeholder.clone(),
            current: placeholder.clone(),
            next: placeholder,
        }
    }

    /// Advances the stream. Unrecognized characters fail as soon as they are lexed.
    fn bump(&mut self) -> ParserResult<()> {
        let incoming = self.lexer.next_token();

        if let Token::Unrecognized(ch) = incoming.token {
            return Err(ParserError::Lex(LexError::UnexpectedCharacter {
                character: ch,
                position: incoming.span.start_pos,
            }));
        }

        let incoming = std::mem::replace(&mut self.next, incoming);
        self.previous = std::mem::replace(&mut self.current, incoming);
        Ok(())
    }

    /// Fills the current and pre-fetched token slots.
    fn prime(&mut self) -> ParserResult<()> {
        self.bump()?;
        self.bump()
    }

    /// Checks whether or not the current token matches the given token.
    fn check(&self, t: &Token) -> bool {
        self.current.token == *t
    }

    /// Checks whether or not the current token matches the given token.
    /// If true consume it and return true, else return false.
    fn check_consume(&mut self, t: &Token) -> ParserResult<bool> {
        if self.check(t) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes a token the caller already matched.
    fn expect(&mut self, expected: Token) -> ParserResult<()> {
        debug_assert_eq!(self.current.token, expected);
        self.bump()
    }

    /// Consumes token, asserting that it equals the expected token.
    fn consume(&mut self, t: Token) -> ParserResult<()> {
        if self.check(&t) {
            self.bump()
        } else {
            Err(self.error_here(Item::Token(t)))
        }
    }

    fn error_here(&self, expected: Item) -> ParserError {
        ParserError::unexpected(expected, &self.current.token, self.current.span)
    }

    /// Parses program from the top treating it as a set of statements.
    pub fn parse(mut self) -> ParserResult<Program> {
        self.prime()?;

        let mut stmts = vec![];
        while !self.check(&Token::EndOfFile) {
            stmts.push(self.parse_statement()?);
        }

        Ok(Program { stmts })
    }

    /// Parses the whole source as a single expression.
    pub fn parse_expression(mut self) -> ParserResult<Expr> {
        self.prime()?;

        let expr = self.parse_expr()?;
        if !self.check(&Token::EndOfFile) {
            return Err(self.error_here(Item::Token(Token::EndOfFile)));
        }

        Ok(expr)
    }

    fn parse_statement(&mut self) -> ParserResult<Stmt> {
        let curr_span = self.current.span;

        let stmt_type = match self.current.token {
            Token::Print => self.parse_print()?,
            Token::If => self.parse_if_else()?,
            Token::While => self.parse_while()?,
            Token::For => self.parse_for()?,
            Token::Identifier(_)
                if matches!(
                    self.next.token,
                    Token::Equals | Token::PlusPlus | Token::MinusMinus
                ) =>
            {
                let stmt_type = self.parse_assignment_or_update()?;
                self.consume(Token::Semicolon)?;
                stmt_type
            }
            _ => {
                let expr = self.parse_expr()?;
                self.consume(Token::Semicolon)?;
                StmtType::Expression(expr)
            }
        };

        Ok(to_stmt(stmt_type, curr_span.extend(self.previous.span)))
    }

    /// Parses `print(a, b, end="...");`.
    fn parse_print(&mut self) -> ParserResult<StmtType> {
        self.expect(Token::Print)?;
        self.consume(Token::LeftParen)?;

        let mut exprs = vec![self.parse_expr()?];
        let mut terminator = None;
        while self.check_consume(&Token::Comma)? {
            if self.check(&Token::End) {
                terminator = Some(self.parse_terminator()?);
                break;
            }
            exprs.push(self.parse_expr()?);
        }

        self.consume(Token::RightParen)?;
        let end_span = self.current.span;
        self.consume(Token::Semicolon)?;

        let terminator = terminator.unwrap_or_else(|| {
            to_expr(
                from_literal(Literal::Str(DEFAULT_TERMINATOR.to_owned())),
                end_span,
            )
        });

        Ok(StmtType::Print(exprs, terminator))
    }

    /// Parses the `end = "..."` clause of a print statement.
    fn parse_terminator(&mut self) -> ParserResult<Expr> {
        self.expect(Token::End)?;
        self.consume(Token::Equals)?;

        let span = self.current.span;
        let terminator = match &self.current.token {
            Token::String(s) => s.clone(),
            _ => return Err(self.error_here(Item::StringLiteral)),
        };
        self.bump()?;

        Ok(to_expr(from_literal(Literal::Str(terminator)), span))
    }

    /// Parses `name = expr`, `name++` or `name--` without a trailing semicolon.
    fn parse_assignment_or_update(&mut self) -> ParserResult<StmtType> {
        let ident = self.parse_identifier()?;

        let stmt_type = match self.current.token {
            Token::Equals => {
                self.bump()?;
                StmtType::Assignment(ident, self.parse_expr()?)
            }
            Token::PlusPlus => {
                self.bump()?;
                StmtType::PostfixUpdate(ident, UpdateOperator::Increment)
            }
            Token::MinusMinus => {
                self.bump()?;
                StmtType::PostfixUpdate(ident, UpdateOperator::Decrement)
            }
            _ => return Err(self.error_here(Item::UpdateClause)),
        };

        Ok(stmt_type)
    }

    fn parse_if_else(&mut self) -> ParserResult<StmtType> {
        self.expect(Token::If)?;
        let condition = self.parse_condition()?;

        let if_body = self.parse_block()?;
        let else_body = if self.check_consume(&Token::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(StmtType::IfElse(condition, if_body, else_body))
    }

    fn parse_while(&mut self) -> ParserResult<StmtType> {
        self.expect(Token::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(StmtType::While(condition, body))
    }

    /// Parse for loop. All three clauses are required.
    fn parse_for(&mut self) -> ParserResult<StmtType> {
        self.expect(Token::For)?;
        self.consume(Token::LeftParen)?;

        // Initializer is always a plain assignment.
        let init_span = self.current.span;
        let ident = self.parse_identifier()?;
        self.consume(Token::Equals)?;
        let value = self.parse_expr()?;
        let init_stmt = to_stmt(
            StmtType::Assignment(ident, value),
            init_span.extend(self.previous.span),
        );
        self.consume(Token::Semicolon)?;

        let condition = self.parse_expr()?;
        self.consume(Token::Semicolon)?;

        let update_span = self.current.span;
        let update = self.parse_assignment_or_update()?;
        let update_stmt = to_stmt(update, update_span.extend(self.previous.span));
        self.consume(Token::RightParen)?;

        let body = self.parse_block()?;
        Ok(StmtType::For(
            Box::new(init_stmt),
            condition,
            Box::new(update_stmt),
            body,
        ))
    }

    /// Parses a parenthesized condition.
    fn parse_condition(&mut self) -> ParserResult<Expr> {
        self.consume(Token::LeftParen)?;
        let condition = self.parse_expr()?;
        self.consume(Token::RightParen)?;
        Ok(condition)
    }

    /// Parses `{ stmt* }`.
    fn parse_block(&mut self) -> ParserResult<Vec<Stmt>> {
        self.consume(Token::LeftBrace)?;

        let mut stmts = vec![];
        while !self.check(&Token::RightBrace) {
            if self.check(&Token::EndOfFile) {
                return Err(self.error_here(Item::Token(Token::RightBrace)));
            }
            stmts.push(self.parse_statement()?);
        }

        self.expect(Token::RightBrace)?;
        Ok(stmts)
    }

    fn parse_identifier(&mut self) -> ParserResult<Identifier> {
        let ident = match &self.current.token {
            Token::Identifier(name) => Identifier::new(name.clone(), self.current.span),
            _ => return Err(self.error_here(Item::Identifier)),
        };
        self.bump()?;
        Ok(ident)
    }

    fn parse_expr(&mut self) -> ParserResult<Expr> {
        self.run_pratt_parse_algo(Precedence::Lowest)
    }

    /// Precedence climbing. Each loop iteration folds one operator into `lhs`.
    fn run_pratt_parse_algo(&mut self, min_precedence: Precedence) -> ParserResult<Expr> {
        let mut lhs = self.parse_primary()?;

        while let Some(op) = BinaryOperator::from_token(&self.current.token) {
            if !op.is_higher_precedence(min_precedence) {
                break;
            }

            self.bump()?;
            let rhs = self.run_pratt_parse_algo(op.precedence())?;
            let span = lhs.span.extend(rhs.span);
            lhs = to_expr(ExprType::Binary(op, Box::new(lhs), Box::new(rhs)), span);
        }

        Ok(lhs)
    }

    /// Parse primary token.
    fn parse_primary(&mut self) -> ParserResult<Expr> {
        if self.check_consume(&Token::LeftParen)? {
            let sub_expr = self.parse_expr()?;
            self.consume(Token::RightParen)?;
            return Ok(sub_expr);
        }

        let curr_span = self.current.span;
        let expr = match &self.current.token {
            Token::Number(n) => from_literal(Literal::Number(*n)),
            Token::String(s) => from_literal(Literal::Str(s.clone())),
            Token::True => from_literal(Literal::Boolean(true)),
            Token::False => from_literal(Literal::Boolean(false)),
            Token::None => from_literal(Literal::None),
            Token::Identifier(name) => {
                ExprType::Variable(Identifier::new(name.clone(), curr_span))
            }
            _ => return Err(self.error_here(Item::Expression)),
        };
        self.bump()?;

        Ok(to_expr(expr, curr_span))
    }
}

fn from_literal(l: Literal) -> ExprType {
    ExprType::Literal(l)
}

fn to_stmt(stmt: StmtType, span: Span) -> Stmt {
    Stmt::new(stmt, span)
}

fn to_expr(expr: ExprType, span: Span) -> Expr {
    Expr::new(expr, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::span::CodePosition;

    fn expr_string(source: &str) -> String {
        Parser::new(source).parse_expression().unwrap().ast_string()
    }

    fn program_strings(source: &str) -> Vec<String> {
        let program = Parser::new(source).parse().unwrap();
        program.stmts.iter().map(|s| s.ast_string()).collect()
    }

    fn parse_error(source: &str) -> ParserError {
        Parser::new(source).parse().unwrap_err()
    }

    fn unexpected(expected: Item, got: Token) -> (Item, Token) {
        (expected, got)
    }

    fn error_parts(error: ParserError) -> (Item, Token) {
        match error {
            ParserError::Unexpected { expected, got, .. } => (expected, got),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence_climbing() {
        assert_eq!(expr_string("99 + 49"), "(+ 99 49)");
        assert_eq!(expr_string("3 + 99 * 20 - 5"), "(- (+ 3 (* 99 20)) 5)");
        assert_eq!(expr_string("8 / 4 / 2"), "(/ (/ 8 4) 2)");
        assert_eq!(expr_string("(1 + 2) * 3"), "(* (+ 1 2) 3)");
        assert_eq!(expr_string("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
        assert_eq!(
            expr_string("a or b and c != d + 1"),
            "(or a (and b (!= c (+ d 1))))"
        );
        assert_eq!(expr_string("a and b and c"), "(and (and a b) c)");
    }

    #[test]
    fn test_primaries() {
        assert_eq!(expr_string("true"), "true");
        assert_eq!(expr_string("false"), "false");
        assert_eq!(expr_string("none"), "none");
        assert_eq!(expr_string("'hi'"), "\"hi\"");
        assert_eq!(expr_string("2.5"), "2.5");
        assert_eq!(expr_string("((x))"), "x");
    }

    #[test]
    fn test_simple_statements() {
        assert_eq!(
            program_strings("x = 1; x++; y--; x; 1 + 2;"),
            vec!["(set x 1)", "(++ x)", "(-- y)", "x", "(+ 1 2)"]
        );
    }

    #[test]
    fn test_print_statements() {
        assert_eq!(
            program_strings(r#"print(1, "a"); print("a", "b", end="-");"#),
            vec![r#"(print 1 "a" :end "\n")"#, r#"(print "a" "b" :end "-")"#]
        );
    }

    #[test]
    fn test_control_flow() {
        assert_eq!(
            program_strings("if (x) { print(1); } else { y = 2; } if (0) {}"),
            vec![r#"(if x {(print 1 :end "\n")} {(set y 2)})"#, "(if 0 {})"]
        );
        assert_eq!(
            program_strings("while (i < 3) { i++; }"),
            vec!["(while (< i 3) {(++ i)})"]
        );
        assert_eq!(
            program_strings("for (i = 0; i < 3; i++) { print(i); }"),
            vec![r#"(for (set i 0) (< i 3) (++ i) {(print i :end "\n")})"#]
        );
        assert_eq!(
            program_strings("for (i = 10; i > 0; i = i - 2) {}"),
            vec!["(for (set i 10) (> i 0) (set i (- i 2)) {})"]
        );
    }

    #[test]
    fn test_statement_spans() {
        let program = Parser::new("x = 1;\nprint(x);").parse().unwrap();
        let second = &program.stmts[1];
        assert_eq!(second.span.start_pos, CodePosition::new(7, 2, 1));
        assert_eq!(
            second.span.extract_string("x = 1;\nprint(x);"),
            Some("print(x);")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            error_parts(parse_error("print(1)")),
            unexpected(Item::Token(Token::Semicolon), Token::EndOfFile)
        );
        assert_eq!(
            error_parts(parse_error("x = ;")),
            unexpected(Item::Expression, Token::Semicolon)
        );
        assert_eq!(
            error_parts(parse_error("x = -5;")),
            unexpected(Item::Expression, Token::Minus)
        );
        assert_eq!(
            error_parts(parse_error("x += 1;")),
            unexpected(Item::Expression, Token::Equals)
        );
        assert_eq!(
            error_parts(parse_error(r#"print(end="x");"#)),
            unexpected(Item::Expression, Token::End)
        );
        assert_eq!(
            error_parts(parse_error("print(1, end=2);")),
            unexpected(Item::StringLiteral, Token::Number(2.0))
        );
        assert_eq!(
            error_parts(parse_error("if (1) { print(1);")),
            unexpected(Item::Token(Token::RightBrace), Token::EndOfFile)
        );
        assert_eq!(
            error_parts(parse_error("for (i++; i < 3; i++) {}")),
            unexpected(Item::Token(Token::Equals), Token::PlusPlus)
        );
        assert_eq!(
            error_parts(parse_error("for (i = 0; i < 3; print(i)) {}")),
            unexpected(Item::Identifier, Token::Print)
        );
        assert_eq!(
            error_parts(parse_error("x y;")),
            unexpected(
                Item::Token(Token::Semicolon),
                Token::Identifier("y".to_owned())
            )
        );
        assert_eq!(
            error_parts(parse_error("else { }")),
            unexpected(Item::Expression, Token::Else)
        );
        assert_eq!(
            error_parts(Parser::new("1 2").parse_expression().unwrap_err()),
            unexpected(Item::Token(Token::EndOfFile), Token::Number(2.0))
        );
    }

    #[test]
    fn test_lex_error_surfaces_through_parser() {
        assert_eq!(
            parse_error("x = 1 $ 2;"),
            ParserError::Lex(LexError::UnexpectedCharacter {
                character: '$',
                position: CodePosition::new(6, 1, 7),
            })
        );
    }

    #[test]
    fn test_empty_program() {
        assert!(Parser::new("  \n\t ").parse().unwrap().stmts.is_empty());
    }
}
