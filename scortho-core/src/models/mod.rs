pub mod scaffold;

// re-export for cleaner imports
pub use self::scaffold::{Nucleotide, Scaffold, reverse_complement};
