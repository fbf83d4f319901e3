//! Token source for the read-input stage.

use std::io::BufRead;

use crate::error::{Result, SeqPipeError};

/// Where the user-supplied integers come from. `Stdin` is the interactive
/// path; `Fixed` lets tests supply the numbers directly.
pub enum InputSource {
    Stdin,
    Fixed(Vec<i64>),
}

impl InputSource {
    /// Read exactly `count` whitespace-separated integers.
    pub fn read_integers(&self, count: usize) -> Result<Vec<i64>> {
        match self {
            InputSource::Fixed(values) => {
                if values.len() < count {
                    return Err(SeqPipeError::InputUnderflow {
                        expected: count,
                        got: values.len(),
                    });
                }
                Ok(values[..count].to_vec())
            }
            InputSource::Stdin => {
                let stdin = std::io::stdin();
                let mut lock = stdin.lock();
                read_integers_from(&mut lock, count)
            }
        }
    }
}

fn read_integers_from<R: BufRead>(reader: &mut R, count: usize) -> Result<Vec<i64>> {
    let mut values = Vec::with_capacity(count);
    let mut line = String::new();

    while values.len() < count {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SeqPipeError::InputUnderflow {
                expected: count,
                got: values.len(),
            });
        }

        for token in line.split_whitespace() {
            if values.len() == count {
                break;
            }
            let value = token
                .parse::<i64>()
                .map_err(|_| SeqPipeError::invalid_token(token))?;
            values.push(value);
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_across_lines() {
        let mut reader = Cursor::new("1 2 3\n4 5\n6 7 8 9 10\n");
        let values = read_integers_from(&mut reader, 10).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_negative_values_accepted() {
        let mut reader = Cursor::new("-5 0 17\n");
        let values = read_integers_from(&mut reader, 3).unwrap();
        assert_eq!(values, vec![-5, 0, 17]);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let mut reader = Cursor::new("1 2 3 4\n");
        let values = read_integers_from(&mut reader, 2).unwrap();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_underflow() {
        let mut reader = Cursor::new("1 2 3\n");
        let err = read_integers_from(&mut reader, 10).unwrap_err();
        assert!(matches!(
            err,
            SeqPipeError::InputUnderflow {
                expected: 10,
                got: 3
            }
        ));
    }

    #[test]
    fn test_invalid_token() {
        let mut reader = Cursor::new("1 two 3\n");
        let err = read_integers_from(&mut reader, 3).unwrap_err();
        assert!(matches!(err, SeqPipeError::InvalidToken(_)));
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn test_fixed_source() {
        let source = InputSource::Fixed(vec![5; 10]);
        assert_eq!(source.read_integers(10).unwrap(), vec![5; 10]);

        let short = InputSource::Fixed(vec![1, 2]);
        assert!(matches!(
            short.read_integers(10).unwrap_err(),
            SeqPipeError::InputUnderflow { .. }
        ));
    }
}
