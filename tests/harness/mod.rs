#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::{
    CONFIGURATION, FULL_VERSION, INSTALL_VERSION, TestContext, write_file,
};
