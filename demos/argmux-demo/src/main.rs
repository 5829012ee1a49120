//! Reference CLI host built on the `argmux` crate.
//!
//! Registers a small, fixed set of commands, resolves `argv` against them,
//! and dispatches to a plain match on the resolved command tag. A real
//! host would likely wire `Command` up to trait objects or a mediator
//! registry instead of a match arm per command, but the wiring shown here
//! is exactly what `argmux` hands back: an opaque handler identity plus a
//! [`Binder`](argmux::Binder) for pulling out typed arguments.

mod tracing_setup;

use std::process::ExitCode;

use argmux::{BindError, EnumConstraint, HandlerIdentity, ResolverResult, Router};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Low,
    Medium,
    High,
}

impl EnumConstraint for Severity {
    fn variant_names() -> &'static [&'static str] {
        &["low", "medium", "high"]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Command {
    Add,
    Deploy,
    Status,
    Docker,
    Exec,
    Report,
}

const REGISTRATIONS: &[(&str, Command)] = &[
    ("add {x:int} {y:int} | Add two integers", Command::Add),
    (
        "deploy {app} --env {e} --dry-run? | Deploy an application to an environment",
        Command::Deploy,
    ),
    ("status | Show current status", Command::Status),
    ("docker {*args} | Run a docker subcommand", Command::Docker),
    (
        "exec -- {*cmd} | Run a command, using '--' to end option parsing",
        Command::Exec,
    ),
    (
        "report {app} --severity {s:severity} | File a severity report for an application",
        Command::Report,
    ),
];

fn build_router() -> Router<Command> {
    let mut router = Router::new();
    router.add_enum::<Severity>("severity");

    for (pattern, command) in REGISTRATIONS {
        if let Err(error) = router.register(pattern, *command) {
            eprintln!("internal error: built-in pattern {pattern:?} failed to compile:");
            eprintln!("{}", argmux::render_parse_error(pattern, &error));
            std::process::exit(1);
        }
    }

    router
}

fn main() -> ExitCode {
    tracing_setup::init();
    let router = build_router();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() || argv[0] == "help" || argv[0] == "--help" {
        print_usage(&router);
        return ExitCode::SUCCESS;
    }

    match router.resolve(&argv) {
        ResolverResult::Success { endpoint, bindings } => {
            let HandlerIdentity::Inline(command) = &endpoint.handler else {
                eprintln!("internal error: demo host never registers typed endpoints");
                return ExitCode::FAILURE;
            };
            let binder = router.binder(endpoint, &bindings);
            match run(*command, &binder) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("error: {error}");
                    ExitCode::FAILURE
                }
            }
        }
        ResolverResult::Failure { error } => {
            eprintln!("error: {error}");
            eprintln!();
            print_usage(&router);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, binder: &argmux::Binder<'_>) -> Result<(), BindError> {
    match command {
        Command::Add => {
            let x: i32 = binder.required("x")?;
            let y: i32 = binder.required("y")?;
            println!("{}", x + y);
        }
        Command::Deploy => {
            let app: String = binder.required("app")?;
            let env: String = binder.required("e")?;
            let dry_run = binder.flag("dry-run");
            if dry_run {
                println!("would deploy {app} to {env}");
            } else {
                println!("deploying {app} to {env}");
            }
        }
        Command::Status => {
            println!("all systems operational");
        }
        Command::Docker => {
            let args = binder.array("args");
            println!("docker {}", args.join(" "));
        }
        Command::Exec => {
            let cmd = binder.array("cmd");
            println!("exec {}", cmd.join(" "));
        }
        Command::Report => {
            let app: String = binder.required("app")?;
            let severity: Severity = binder.required("s")?;
            println!("filed a {severity:?} severity report for {app}");
        }
    }
    Ok(())
}

fn print_usage(router: &Router<Command>) {
    println!("argmux-demo — reference host for the argmux dispatch crate");
    println!();
    println!("Usage: argmux-demo <command> [arguments]");
    println!();
    println!("Commands:");
    for (pattern, description) in router.endpoints().descriptions() {
        match description {
            Some(description) => println!("  {pattern:<24} {description}"),
            None => println!("  {pattern}"),
        }
    }
}
