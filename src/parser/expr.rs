//! Expression grammar: `E`, `Ew`, `T`, `Ta`, `Tc`, `B`, `Bt`, `Bs`, `Bp`,
//! `A`, `At`, `Af`, `Ap`, `R`, `Rn`.

use super::Parser;
use super::error::ParseError;
use crate::token::TokenKind;
use crate::tree::{Label, Operator, Tree};

impl Parser {
    /// `E -> 'let' D 'in' E | 'fn' Vb+ '.' E | Ew`.
    pub(super) fn parse_e(&mut self) -> Result<Tree, ParseError> {
        if self.is_keyword("let") {
            self.advance();
            let d = self.parse_d()?;
            self.expect_keyword("in")?;
            let e = self.parse_e()?;
            return Ok(Tree::new(Label::Let, vec![d, e]));
        }

        if self.is_keyword("fn") {
            self.advance();
            let mut children = Vec::new();
            while self.starts_vb() {
                children.push(self.parse_vb()?);
            }
            if children.is_empty() {
                return Err(ParseError {
                    message: "expected at least one parameter after 'fn'".to_string(),
                    span: self.current_span(),
                });
            }
            self.expect_operator(".")?;
            children.push(self.parse_e()?);
            return Ok(Tree::new(Label::Lambda, children));
        }

        self.parse_ew()
    }

    /// `Ew -> T 'where' Dr | T`.
    fn parse_ew(&mut self) -> Result<Tree, ParseError> {
        let t = self.parse_t()?;
        if self.is_keyword("where") {
            self.advance();
            let dr = self.parse_dr()?;
            return Ok(Tree::new(Label::Where, vec![t, dr]));
        }
        Ok(t)
    }

    /// `T -> Ta (',' Ta)+ | Ta`.
    fn parse_t(&mut self) -> Result<Tree, ParseError> {
        let first = self.parse_ta()?;
        if !self.is_punctuation(",") {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.is_punctuation(",") {
            self.advance();
            items.push(self.parse_ta()?);
        }
        Ok(Tree::new(Label::Tau, items))
    }

    /// `Ta -> Ta 'aug' Tc | Tc` (left-associative).
    fn parse_ta(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_tc()?;
        while self.is_keyword("aug") {
            self.advance();
            let right = self.parse_tc()?;
            left = Tree::new(Label::Op(Operator::Aug), vec![left, right]);
        }
        Ok(left)
    }

    /// `Tc -> B '->' Tc '|' Tc | B` (right-associative).
    fn parse_tc(&mut self) -> Result<Tree, ParseError> {
        let cond = self.parse_b()?;
        if self.is_operator("->") {
            self.advance();
            let then_branch = self.parse_tc()?;
            self.expect_operator("|")?;
            let else_branch = self.parse_tc()?;
            return Ok(Tree::new(Label::Arrow, vec![cond, then_branch, else_branch]));
        }
        Ok(cond)
    }

    /// `B -> B 'or' Bt | Bt` (left-associative).
    fn parse_b(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_bt()?;
        while self.is_keyword("or") {
            self.advance();
            let right = self.parse_bt()?;
            left = Tree::new(Label::Op(Operator::Or), vec![left, right]);
        }
        Ok(left)
    }

    /// `Bt -> Bt '&' Bs | Bs` (left-associative).
    fn parse_bt(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_bs()?;
        while self.is_operator("&") {
            self.advance();
            let right = self.parse_bs()?;
            left = Tree::new(Label::Op(Operator::And), vec![left, right]);
        }
        Ok(left)
    }

    /// `Bs -> 'not' Bp | Bp`.
    fn parse_bs(&mut self) -> Result<Tree, ParseError> {
        if self.is_keyword("not") {
            self.advance();
            let operand = self.parse_bp()?;
            return Ok(Tree::new(Label::Op(Operator::Not), vec![operand]));
        }
        self.parse_bp()
    }

    /// `Bp -> A (gr|ge|ls|le|eq|ne|>|>=|<|<=) A | A`.
    fn parse_bp(&mut self) -> Result<Tree, ParseError> {
        let left = self.parse_a()?;
        let op = match self.current_kind() {
            TokenKind::Keyword(k) => match k.as_str() {
                "gr" => Some(Operator::Gr),
                "ge" => Some(Operator::Ge),
                "ls" => Some(Operator::Ls),
                "le" => Some(Operator::Le),
                "eq" => Some(Operator::Eq),
                "ne" => Some(Operator::Ne),
                _ => None,
            },
            TokenKind::Operator(o) => match o.as_str() {
                ">" => Some(Operator::Gr),
                ">=" => Some(Operator::Ge),
                "<" => Some(Operator::Ls),
                "<=" => Some(Operator::Le),
                _ => None,
            },
            _ => None,
        };
        let Some(op) = op else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_a()?;
        Ok(Tree::new(Label::Op(op), vec![left, right]))
    }

    /// `A -> A (+|-) At | (+|-) At | At` (leading unary `-`, then
    /// left-associative binary `+`/`-`).
    fn parse_a(&mut self) -> Result<Tree, ParseError> {
        let mut left = if self.is_operator("-") {
            self.advance();
            let operand = self.parse_at()?;
            Tree::new(Label::Op(Operator::Neg), vec![operand])
        } else {
            self.parse_at()?
        };

        loop {
            let op = if self.is_operator("+") {
                Operator::Add
            } else if self.is_operator("-") {
                Operator::Sub
            } else {
                break;
            };
            self.advance();
            let right = self.parse_at()?;
            left = Tree::new(Label::Op(op), vec![left, right]);
        }

        Ok(left)
    }

    /// `At -> At (*|/) Af | Af` (left-associative).
    fn parse_at(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_af()?;
        loop {
            let op = if self.is_operator("*") {
                Operator::Mul
            } else if self.is_operator("/") {
                Operator::Div
            } else {
                break;
            };
            self.advance();
            let right = self.parse_af()?;
            left = Tree::new(Label::Op(op), vec![left, right]);
        }
        Ok(left)
    }

    /// `Af -> Ap '**' Af | Ap` (right-associative).
    fn parse_af(&mut self) -> Result<Tree, ParseError> {
        let base = self.parse_ap()?;
        if self.is_operator("**") {
            self.advance();
            let exponent = self.parse_af()?;
            return Ok(Tree::new(Label::Op(Operator::Pow), vec![base, exponent]));
        }
        Ok(base)
    }

    /// `Ap -> Ap '@' ID R | R` (left-associative infix application).
    fn parse_ap(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_r()?;
        while self.is_operator("@") {
            self.advance();
            let name = self.expect_identifier()?;
            let right = self.parse_r()?;
            left = Tree::new(Label::At, vec![left, Tree::leaf(Label::Id(name)), right]);
        }
        Ok(left)
    }

    /// `R -> R Rn | Rn` (left-associative juxtaposition, i.e. function
    /// application).
    fn parse_r(&mut self) -> Result<Tree, ParseError> {
        let mut left = self.parse_rn()?;
        while self.starts_rn() {
            let right = self.parse_rn()?;
            left = Tree::new(Label::Gamma, vec![left, right]);
        }
        Ok(left)
    }

    /// `Rn -> ID | INT | STR | true | false | nil | dummy | '(' E ')'`.
    fn parse_rn(&mut self) -> Result<Tree, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Tree::leaf(Label::Id(name)))
            }
            TokenKind::Integer(digits) => {
                let span = self.current_span();
                self.advance();
                let value: i64 = digits.parse().map_err(|_| ParseError {
                    message: format!("integer literal '{}' is out of range", digits),
                    span,
                })?;
                Ok(Tree::leaf(Label::Int(value)))
            }
            TokenKind::StringLiteral(value) => {
                self.advance();
                Ok(Tree::leaf(Label::Str(value)))
            }
            TokenKind::Keyword(k) if k == "true" => {
                self.advance();
                Ok(Tree::leaf(Label::True))
            }
            TokenKind::Keyword(k) if k == "false" => {
                self.advance();
                Ok(Tree::leaf(Label::False))
            }
            TokenKind::Keyword(k) if k == "nil" => {
                self.advance();
                Ok(Tree::leaf(Label::Nil))
            }
            TokenKind::Keyword(k) if k == "dummy" => {
                self.advance();
                Ok(Tree::leaf(Label::Dummy))
            }
            TokenKind::Punctuation(p) if p == "(" => {
                self.advance();
                let inner = self.parse_e()?;
                self.expect_punctuation(")")?;
                Ok(inner)
            }
            _ => Err(ParseError {
                message: format!(
                    "expected an expression, found {}",
                    Self::describe(self.current_kind())
                ),
                span: self.current_span(),
            }),
        }
    }
}
