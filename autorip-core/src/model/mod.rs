//! Domain model assembled from makemkvcon output: a [`Disc`] of [`Title`]s,
//! each made of [`Stream`]s, every level carrying an [`Info`] attribute
//! store. [`Drive`] describes a detected disc drive.

mod disc;
mod drive;
mod info;
mod stream;
mod title;

pub use disc::Disc;
pub use drive::Drive;
pub use info::Info;
pub use stream::Stream;
pub use title::Title;
