//! Smallest useful Cling app.
//!
//! There is no always-run route, so an empty command line falls through to
//! the usage listing. Set `CLING_GREET_HINT` to print a hint instead.

use std::env;

use cling::{ClingError, Router};

fn main() -> Result<(), ClingError> {
    let debug = env::var("CLING_DEBUG").ok();
    let mut app = Router::new().with_options(debug.map(|value| ("debug", value)));

    app.command_with_short("name:", "n", |ctx| {
        println!("Hello {}", ctx.value_or_empty());
        Ok(())
    })?
    .help("Name to greet.");

    app.command("fail", |_ctx| Err(anyhow::anyhow!("asked to fail")))?
        .help("Exit through the failure path.");

    if let Ok(hint) = env::var("CLING_GREET_HINT") {
        app.set_not_found(move |router| {
            println!("{hint}");
            println!("Try `{} --name=<VALUE>`.", router.app_name());
            Ok(())
        });
    }

    app.run()
}
