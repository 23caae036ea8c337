use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use serde_json::json;
use shapes::api::{
    area, compare_with, describe_with, draw_many, perimeter, project, EngineCfg, Role, SampleCfg,
    Shape, DESCRIBE_PRECISION, MAX_DESCRIBE_PRECISION,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;

#[derive(Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Shape areas, comparisons and role-filtered projections")]
struct Cmd {
    /// Decimal digits in area labels
    #[arg(
        long,
        default_value_t = DESCRIBE_PRECISION,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DESCRIBE_PRECISION as u64)
    )]
    precision: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print kind, area, perimeter and label of one shape (e.g. circle:3)
    Describe { shape: String },
    /// Compare two shapes by area; prints -1, 0 or 1
    Compare {
        a: String,
        b: String,
        /// Absolute area difference treated as a tie
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Print the fields of a shape visible to a role
    Project {
        shape: String,
        #[arg(long, default_value = "user")]
        role: String,
        /// Extra attribute `name=value[:public|:private]`; repeatable
        #[arg(long = "attr")]
        attrs: Vec<String>,
    },
    /// Draw shapes from the deterministic sampler
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = EngineCfg {
        describe_precision: cmd.precision,
        ..EngineCfg::default()
    };
    match cmd.action {
        Action::Describe { shape } => describe(&shape, &cfg),
        Action::Compare { a, b, eps } => compare(&a, &b, &EngineCfg { tie_eps: eps, ..cfg }),
        Action::Project { shape, role, attrs } => project_cmd(&shape, &role, &attrs),
        Action::Sample { seed, count } => sample(seed, count, &cfg),
        Action::Report => report(),
    }
}

fn build(token: &str) -> Result<Shape> {
    let shape = parse::shape_builder(token)?
        .build()
        .with_context(|| format!("building `{token}`"))?;
    Ok(shape)
}

fn summary(shape: &Shape, cfg: &EngineCfg) -> serde_json::Value {
    json!({
        "kind": shape.kind(),
        "area": area(shape),
        "perimeter": perimeter(shape),
        "label": describe_with(shape, cfg),
    })
}

fn describe(token: &str, cfg: &EngineCfg) -> Result<()> {
    let shape = build(token)?;
    tracing::info!(kind = %shape.kind(), area = area(&shape), "describe");
    println!("{}", serde_json::to_string_pretty(&summary(&shape, cfg))?);
    Ok(())
}

fn compare(a: &str, b: &str, cfg: &EngineCfg) -> Result<()> {
    let (sa, sb) = (build(a)?, build(b)?);
    let order = compare_with(&sa, &sb, cfg);
    tracing::info!(a, b, eps = cfg.tie_eps, order, "compare");
    let obj = json!({
        "a": summary(&sa, cfg),
        "b": summary(&sb, cfg),
        "order": order,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn project_cmd(token: &str, role: &str, attrs: &[String]) -> Result<()> {
    let role: Role = role.parse()?;
    let mut builder = parse::shape_builder(token)?;
    for attr in attrs {
        let (name, value, visibility) = parse::attribute(attr)?;
        builder = builder.attribute(name, value, visibility);
    }
    let shape = builder
        .build()
        .with_context(|| format!("building `{token}`"))?;
    let view = project(&shape, role);
    tracing::info!(role = ?role, fields = view.len(), "project");
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn sample(seed: u64, count: usize, cfg: &EngineCfg) -> Result<()> {
    tracing::info!(seed, count, "sample");
    let shapes = draw_many(&SampleCfg::default(), seed, count)?;
    let out: Vec<_> = shapes.iter().map(|s| summary(s, cfg)).collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = json!({
        "code_rev": rev,
        "version": shapes::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
