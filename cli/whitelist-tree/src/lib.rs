pub mod common;

pub use common::{
    build_tree, encode_node, get_proof, load_whitelist, parse_identity, parse_node,
    parse_whitelist, write_file_atomic, WhitelistFile,
};
