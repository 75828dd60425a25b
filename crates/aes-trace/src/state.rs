//! Block and state representations.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// The 4×4 cipher state, indexed `[row][col]`.
///
/// A block maps onto the state column by column: byte `4 * col + row` of the
/// block lands in `state[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Wraps a row-major matrix.
    pub const fn from_rows(rows: [[u8; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Places a block into the state column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (offset, &byte) in block.iter().enumerate() {
            rows[offset % 4][offset / 4] = byte;
        }
        Self(rows)
    }

    /// Reads the state back out column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (offset, byte) in block.iter_mut().enumerate() {
            *byte = self.0[offset % 4][offset / 4];
        }
        block
    }

    /// Borrows the rows.
    #[inline]
    pub fn rows(&self) -> &[[u8; 4]; 4] {
        &self.0
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; 4]; 4] {
        &mut self.0
    }

    /// Returns the byte at `[row][col]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Copies out column `col` from top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col` from top to bottom.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }

    /// XORs `rhs` into `self` cell by cell.
    #[inline]
    pub fn xor_in_place(&mut self, rhs: &State) {
        for (dst_row, rhs_row) in self.0.iter_mut().zip(rhs.0.iter()) {
            for (d, r) in dst_row.iter_mut().zip(rhs_row.iter()) {
                *d ^= *r;
            }
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
