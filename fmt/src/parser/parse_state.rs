// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ArgRef, Cursor, FormatErrorKind, IndexingMode, LocatedError};

/// Argument indexing style of the call so far. Once set it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexingState {
    #[default]
    Unset,
    Manual,
    Automatic,
}

/// Everything the parser carries from one placeholder to the next: the read position,
/// the next automatic index, and the indexing style. Dynamic width and precision
/// references share all three with the placeholders around them.
#[derive(Debug)]
pub struct ParseState<'a> {
    pub cursor: Cursor<'a>,
    next_automatic: u32,
    indexing: IndexingState,
}

impl<'a> ParseState<'a> {
    #[must_use]
    pub fn new(format_string: &'a str) -> Self {
        Self {
            cursor: Cursor::new(format_string),
            next_automatic: 0,
            indexing: IndexingState::Unset,
        }
    }

    #[must_use]
    pub fn indexing(&self) -> IndexingState { self.indexing }

    /// Parse an argument reference at the cursor: digits, an identifier, or nothing (the
    /// next automatic index). Returns the reference and where it starts.
    ///
    /// Names are allowed in either indexing style.
    pub fn parse_arg_ref(&mut self) -> Result<(ArgRef<'a>, usize), LocatedError> {
        let position = self.cursor.position();

        if let Some(index) = self.cursor.number() {
            self.switch_to(IndexingState::Manual, position)?;
            let index = u32::try_from(index)
                .map_err(|_| FormatErrorKind::ArgumentIndexOutOfRange.at(position))?;
            return Ok((ArgRef::Index(index), position));
        }

        if let Some(name) = self.cursor.identifier() {
            return Ok((ArgRef::Name(name), position));
        }

        self.switch_to(IndexingState::Automatic, position)?;
        let index = self.next_automatic;
        self.next_automatic += 1;
        Ok((ArgRef::Index(index), position))
    }

    fn switch_to(
        &mut self,
        target: IndexingState,
        position: usize,
    ) -> Result<(), LocatedError> {
        match (self.indexing, target) {
            (IndexingState::Unset, _) => {
                self.indexing = target;
                Ok(())
            }
            (current, target) if current == target => Ok(()),
            (IndexingState::Manual, _) => Err(FormatErrorKind::MixedIndexingMode {
                from: IndexingMode::Manual,
                to: IndexingMode::Automatic,
            }
            .at(position)),
            _ => Err(FormatErrorKind::MixedIndexingMode {
                from: IndexingMode::Automatic,
                to: IndexingMode::Manual,
            }
            .at(position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_automatic_indices_increment() {
        let mut state = ParseState::new("");
        assert_eq!(state.parse_arg_ref().unwrap().0, ArgRef::Index(0));
        assert_eq!(state.parse_arg_ref().unwrap().0, ArgRef::Index(1));
        assert_eq!(state.indexing(), IndexingState::Automatic);
    }

    #[test]
    fn test_manual_then_automatic_fails() {
        let mut state = ParseState::new("1");
        assert_eq!(state.parse_arg_ref().unwrap(), (ArgRef::Index(1), 0));
        let error = state.parse_arg_ref().unwrap_err();
        assert_eq!(
            error.kind,
            FormatErrorKind::MixedIndexingMode {
                from: IndexingMode::Manual,
                to: IndexingMode::Automatic,
            }
        );
        assert_eq!(error.position, 1);
    }

    #[test]
    fn test_names_do_not_fix_the_style() {
        let mut state = ParseState::new("name");
        assert_eq!(state.parse_arg_ref().unwrap().0, ArgRef::Name("name"));
        assert_eq!(state.indexing(), IndexingState::Unset);
    }
}
