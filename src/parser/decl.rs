//! Definition grammar: `D`, `Da`, `Dr`, `Db`, `Vb`, `Vl`.

use super::Parser;
use super::error::ParseError;
use crate::tree::{Label, Tree};

impl Parser {
    /// `D -> Da 'within' D | Da`.
    pub(super) fn parse_d(&mut self) -> Result<Tree, ParseError> {
        let da = self.parse_da()?;
        if self.is_keyword("within") {
            self.advance();
            let d = self.parse_d()?;
            return Ok(Tree::new(Label::Within, vec![da, d]));
        }
        Ok(da)
    }

    /// `Da -> Dr ('and' Dr)+ | Dr`.
    fn parse_da(&mut self) -> Result<Tree, ParseError> {
        let first = self.parse_dr()?;
        if !self.is_keyword("and") {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.is_keyword("and") {
            self.advance();
            items.push(self.parse_dr()?);
        }
        Ok(Tree::new(Label::And, items))
    }

    /// `Dr -> 'rec' Db | Db`.
    pub(super) fn parse_dr(&mut self) -> Result<Tree, ParseError> {
        if self.is_keyword("rec") {
            self.advance();
            let db = self.parse_db()?;
            return Ok(Tree::new(Label::Rec, vec![db]));
        }
        self.parse_db()
    }

    /// `Db -> Vl '=' E | ID Vb+ '=' E | '(' D ')'`.
    fn parse_db(&mut self) -> Result<Tree, ParseError> {
        if self.is_punctuation("(") {
            self.advance();
            let d = self.parse_d()?;
            self.expect_punctuation(")")?;
            return Ok(d);
        }

        let name = self.expect_identifier()?;

        if self.is_punctuation(",") {
            let mut names = vec![name];
            while self.is_punctuation(",") {
                self.advance();
                names.push(self.expect_identifier()?);
            }
            self.expect_operator("=")?;
            let value = self.parse_e()?;
            let lhs = Tree::new(
                Label::Tau,
                names.into_iter().map(Label::Id).map(Tree::leaf).collect(),
            );
            return Ok(Tree::new(Label::Equal, vec![lhs, value]));
        }

        if self.is_operator("=") {
            self.advance();
            let value = self.parse_e()?;
            return Ok(Tree::new(
                Label::Equal,
                vec![Tree::leaf(Label::Id(name)), value],
            ));
        }

        if self.starts_vb() {
            let mut children = vec![Tree::leaf(Label::Id(name))];
            while self.starts_vb() {
                children.push(self.parse_vb()?);
            }
            self.expect_operator("=")?;
            children.push(self.parse_e()?);
            return Ok(Tree::new(Label::FunctionForm, children));
        }

        Err(ParseError {
            message: format!(
                "expected '=', ',', or a parameter after '{}'",
                name
            ),
            span: self.current_span(),
        })
    }

    /// `Vb -> ID | '(' ')' | '(' Vl ')'`.
    pub(super) fn parse_vb(&mut self) -> Result<Tree, ParseError> {
        if let Ok(name) = self.try_identifier() {
            return Ok(Tree::leaf(Label::Id(name)));
        }

        self.expect_punctuation("(")?;
        if self.is_punctuation(")") {
            self.advance();
            return Ok(Tree::leaf(Label::EmptyVb));
        }

        let names = self.parse_vl()?;
        self.expect_punctuation(")")?;

        if names.len() == 1 {
            Ok(Tree::leaf(Label::Id(names.into_iter().next().unwrap())))
        } else {
            Ok(Tree::new(
                Label::Tau,
                names.into_iter().map(Label::Id).map(Tree::leaf).collect(),
            ))
        }
    }

    /// `Vl -> ID (',' ID)*`.
    fn parse_vl(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.expect_identifier()?];
        while self.is_punctuation(",") {
            self.advance();
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    fn try_identifier(&mut self) -> Result<String, ParseError> {
        use crate::token::TokenKind;
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: "not an identifier".to_string(),
                span: self.current_span(),
            })
        }
    }
}
