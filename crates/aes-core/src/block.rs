//! Block and state representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Maps block byte `i` to its `(row, column)` position in the state grid.
///
/// Bytes are laid out column-major: byte `i` lives at `(i % 4, i / 4)`.
#[inline]
pub const fn cell(i: usize) -> (usize, usize) {
    (i % 4, i / 4)
}

/// The 4×4 working grid for one block transform, indexed as `[row][column]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub(crate) [[u8; 4]; 4]);

impl State {
    /// Loads a block into a state grid.
    pub fn load(block: &Block) -> Self {
        let mut grid = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            let (row, col) = cell(i);
            grid[row][col] = *byte;
        }
        Self(grid)
    }

    /// Writes the grid back into `block` using the same mapping as [`State::load`].
    pub fn store(&self, block: &mut Block) {
        for (i, byte) in block.iter_mut().enumerate() {
            let (row, col) = cell(i);
            *byte = self.0[row][col];
        }
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Returns column `col` top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }

    /// Mutable access to row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8; 4] {
        &mut self.0[row]
    }

    /// Iterates mutably over all 16 bytes.
    #[inline]
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flat_map(|row| row.iter_mut())
    }
}
