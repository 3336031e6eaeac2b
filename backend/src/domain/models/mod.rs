pub mod cow;
pub mod farmer;
pub mod insemination;
pub mod session;
