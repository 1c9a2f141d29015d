mod check;
mod init;
mod show;

pub use check::check;
pub use init::init;
pub use show::show;
