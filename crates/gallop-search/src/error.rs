// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::fmt::Display;

/// Details about a seed index that does not address an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoundsError {
    /// The rejected index.
    pub index: usize,
    /// The length of the sequence at the time of the call.
    pub len: usize,
}

impl Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Index {} is out of bounds for a sequence of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

/// Details about a required argument that was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingArgumentError {
    /// The name of the absent argument (e.g. "comparator").
    pub argument: &'static str,
}

impl Display for MissingArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required argument `{}`", self.argument)
    }
}

impl std::error::Error for MissingArgumentError {}

/// The error type for boundary searches.
///
/// A target that matches nothing is not an error; searches report it as
/// `None`. Every failure is deterministic, so retrying with the same inputs
/// fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// The seed index lies outside `[0, len)`.
    OutOfBounds(OutOfBoundsError),
    /// A required argument was absent.
    MissingArgument(MissingArgumentError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "Out of bounds: {}", e),
            Self::MissingArgument(e) => write!(f, "Invalid argument: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::MissingArgument(e) => Some(e),
        }
    }
}

impl From<OutOfBoundsError> for SearchError {
    fn from(e: OutOfBoundsError) -> Self {
        Self::OutOfBounds(e)
    }
}

impl From<MissingArgumentError> for SearchError {
    fn from(e: MissingArgumentError) -> Self {
        Self::MissingArgument(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_out_of_bounds() {
        let err = SearchError::from(OutOfBoundsError { index: 7, len: 3 });
        assert_eq!(
            format!("{}", err),
            "Out of bounds: Index 7 is out of bounds for a sequence of length 3"
        );
    }

    #[test]
    fn test_display_missing_argument() {
        let err = SearchError::from(MissingArgumentError {
            argument: "target",
        });
        assert_eq!(
            format!("{}", err),
            "Invalid argument: Missing required argument `target`"
        );
    }

    #[test]
    fn test_source_is_detail() {
        let detail = OutOfBoundsError { index: 0, len: 0 };
        let err = SearchError::OutOfBounds(detail);
        let source = err.source().expect("source should be present");
        assert_eq!(source.to_string(), detail.to_string());
    }
}
