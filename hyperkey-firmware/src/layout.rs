use hyperkey_common::keycodes::key_range;

/// The logical key at a matrix position: the HID code printed on the key cap. Zero means no key.
pub type KeyId = u8;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    Empty,
    DuplicateKey { key: KeyId, row: usize, col: usize },
    RowColMismatch { rows: usize, cols: usize },
}

/// Fixed mapping from matrix position to logical key. No key appears at more than one position.
#[derive(Debug, Clone, Copy)]
pub struct KeyLayout<'l> {
    codes: &'l [KeyId],
    cols: usize,
}

impl<'l> KeyLayout<'l> {
    pub fn from_rows<const COLS: usize>(rows: &'l [[KeyId; COLS]]) -> Result<Self, LayoutError> {
        let codes = rows.as_flattened();
        if codes.is_empty() {
            return Err(LayoutError::Empty);
        }

        for (i, &key) in codes.iter().enumerate() {
            if key != key_range::NONE && codes[..i].contains(&key) {
                return Err(LayoutError::DuplicateKey {
                    key,
                    row: i / COLS,
                    col: i % COLS,
                });
            }
        }

        Ok(Self { codes, cols: COLS })
    }

    pub fn rows(&self) -> usize {
        self.codes.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The key at `row`, `col`; `None` for positions outside the matrix or without a key.
    pub fn key(&self, row: usize, col: usize) -> Option<KeyId> {
        if col >= self.cols {
            return None;
        }
        self.codes
            .get(row * self.cols + col)
            .copied()
            .filter(|k| *k != key_range::NONE)
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod test;
