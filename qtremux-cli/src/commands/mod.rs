// qtremux-cli/src/commands/mod.rs
//
// One module per subcommand. Each command returns the process exit code to
// use on success; fatal core errors propagate and are rendered in main.

pub mod info;
pub mod remux;
