//! Little demo application for Cling.
//!
//! ```text
//! cling-demo --help
//! cling-demo --hello-world=Alice
//! cling-demo -c demo.toml --hello-world Bob
//! printf 'a\nb\n' | cling-demo
//! CLING_DEBUG=1 cling-demo -c missing.toml
//! ```

use anyhow::Context;
use cling::{logging, ClingError, RealStdin, Router, StdinReader};

fn build(app: &mut Router) -> Result<(), ClingError> {
    app.command_with_short("help", "h", |ctx| {
        print!("{}", ctx.usage());
        ctx.halt();
        Ok(())
    })?
    .help("This Helptext.");

    app.command_with_short("config:", "c", |ctx| {
        let path = ctx.value_or_empty().to_string();
        let pairs = cling::config::load(&path)
            .with_context(|| format!("loading config from {path}"))?;
        ctx.options_mut().extend(pairs);
        Ok(())
    })?
    .help("Load options from a TOML file.");

    app.command("hello-world:", |ctx| {
        let name = ctx.value_or_empty();
        anyhow::ensure!(!name.is_empty(), "nobody to greet");
        let greeting = ctx.options().get_str("greeting").unwrap_or("Hello");
        println!("{greeting} {name}");
        Ok(())
    })?
    .help("Hello World Example.");

    app.always_run(|_ctx| {
        tracing::info!("Hello World Logging");
        println!("Always Executed.");
        Ok(())
    })?;

    if !RealStdin.is_terminal() {
        app.stdin_reader(|ctx| {
            while let Some(line) = ctx.read_line()? {
                print!("stdin: {line}");
            }
            Ok(())
        })?;
    }

    Ok(())
}

fn main() -> Result<(), ClingError> {
    // `debug = true` in a config file switches it on mid-run as well.
    let debug = std::env::var("CLING_DEBUG").ok();
    let mut app = Router::new().with_options(debug.map(|value| ("debug", value)));
    logging::init(app.options());

    build(&mut app)?;
    app.run()
}
