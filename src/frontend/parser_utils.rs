use super::grammar::BinaryOperator;
use super::token::Token;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    // Lowest precedence
    Lowest,
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    Addition,
    Multiplication, // Highest precedence
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Asterisk => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            Token::DoubleEq => BinaryOperator::EqualTo,
            Token::BangEq => BinaryOperator::NotEqualTo,
            Token::RightAngle => BinaryOperator::GreaterThan,
            Token::RightAngleEq => BinaryOperator::GreaterEq,
            Token::LeftAngle => BinaryOperator::LessThan,
            Token::LeftAngleEq => BinaryOperator::LessEq,
            Token::And => BinaryOperator::And,
            Token::Or => BinaryOperator::Or,
            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            BinaryOperator::Or => Precedence::LogicalOr,
            BinaryOperator::And => Precedence::LogicalAnd,
            BinaryOperator::EqualTo | BinaryOperator::NotEqualTo => Precedence::Equality,
            BinaryOperator::GreaterEq
            | BinaryOperator::LessEq
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThan => Precedence::Comparison,
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Addition,
            BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::Multiplication,
        }
    }

    /// Every level is left associative, so an operator only binds when strictly tighter.
    pub fn is_higher_precedence(&self, min_precedence: Precedence) -> bool {
        self.precedence() > min_precedence
    }
}
