
mod controller;

pub(crate) use fake_host::{FakeHost, HostOp};
