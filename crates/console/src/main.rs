//! `stockroom` binary entry point.

use clap::Parser;

use stockroom_console::{ConsoleArgs, MainScreen, TerminalPrompter};
use stockroom_infra::Inventory;

fn main() -> anyhow::Result<()> {
    let args = ConsoleArgs::parse();
    if !args.colors_enabled() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    stockroom_observability::init(&args.log_config());
    tracing::info!(lookup = ?args.lookup_policy(), "starting stockroom");

    let mut inventory = Inventory::with_lookup_policy(args.lookup_policy());
    let mut prompter = TerminalPrompter::new();
    MainScreen::new(&mut inventory, &mut prompter).run()
}
