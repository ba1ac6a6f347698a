//! Tokenizer for digit-run streams.
//!
//! Both automaton descriptions and word tokens are read the same way: every
//! maximal run of ASCII digits is one non-negative integer, and every other
//! byte is a separator.

use std::convert::Infallible;

/// Failure to produce the next integer. `E` is the byte source's error.
#[derive(Debug)]
pub(crate) enum NumberError<E> {
    Read(E),
    TooLarge(String),
}

/// Iterator over the integers of a byte stream.
pub(crate) struct Numbers<I> {
    bytes: I,
}

impl<I, E> Numbers<I>
where
    I: Iterator<Item = Result<u8, E>>,
{
    pub(crate) fn new(bytes: I) -> Self {
        Self { bytes }
    }

    // Skips separators, then accumulates one digit run. The byte that ends a
    // run is a separator and is consumed along with it.
    fn read_number(&mut self) -> Result<Option<usize>, NumberError<E>> {
        let mut digits = String::new();

        for byte in self.bytes.by_ref() {
            let byte = byte.map_err(NumberError::Read)?;
            if byte.is_ascii_digit() {
                digits.push(char::from(byte));
            } else if !digits.is_empty() {
                break;
            }
        }

        if digits.is_empty() {
            return Ok(None);
        }

        digits
            .parse::<usize>()
            .map(Some)
            .map_err(|_| NumberError::TooLarge(digits))
    }
}

impl<I, E> Iterator for Numbers<I>
where
    I: Iterator<Item = Result<u8, E>>,
{
    type Item = Result<usize, NumberError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_number().transpose()
    }
}

/// Tokenize an in-memory string.
pub(crate) fn numbers_in(text: &str) -> Numbers<impl Iterator<Item = Result<u8, Infallible>> + '_> {
    Numbers::new(text.bytes().map(Ok))
}
