//! A minimal whitespace tokenizer shared by every reader.

use crate::error::{Id3Error, Result};

pub struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
        }
    }

    pub fn next_str(&mut self) -> Result<&'a str> {
        self.iter
            .next()
            .ok_or_else(|| Id3Error::invalid("unexpected end of input"))
    }

    pub fn next_usize(&mut self) -> Result<usize> {
        let tok = self.next_str()?;
        tok.parse()
            .map_err(|_| Id3Error::invalid(format!("expected an unsigned integer, found '{tok}'")))
    }

    pub fn next_i64(&mut self) -> Result<i64> {
        let tok = self.next_str()?;
        tok.parse()
            .map_err(|_| Id3Error::invalid(format!("expected an integer, found '{tok}'")))
    }
}
