//! Subcommand handlers

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use numviz_math::calculator::{CalculatorState, Key};
use numviz_math::format::{format_root, format_root_set};
use numviz_math::input::parse_numbers;
use numviz_math::interpolation::SequencePredictor;
use numviz_math::plots::{
    Approach, Chart, Function, IntegralSummary, LimitExample, RiemannRule, SampleRange,
    derivative_chart, integral_chart, limit_chart, taylor_chart,
};
use numviz_math::precision::{EXPORT_FILE_NAME, PrecisionEngine, PrecisionRequest, Task};
use numviz_math::render::{MarkupRenderer, render_with_caption};
use numviz_math::roots::{Polynomial, RootSolver, TOLERANCE};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CliResult;
use crate::format::{emit, eprintln_status, format_cell, println_colored};
use crate::render::{LatexRenderer, TextChartRenderer};
use crate::{Args, Commands, DEFAULT_DIGITS, DEFAULT_SAMPLES, PlotCommand, Verbosity, Window};

/// One root with its LaTeX form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RootReport {
    pub re: f64,
    pub im: f64,
    pub latex: String,
}

/// Solver output for machine-readable formats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SolveReport {
    pub degree: usize,
    pub coefficients: Vec<f64>,
    pub roots: Vec<RootReport>,
    pub latex: String,
}

/// Chart plus whatever the chart page shows next to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PlotReport {
    pub chart: Chart,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach: Option<Approach>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integral: Option<IntegralSummary>,
}

/// Dispatch the parsed subcommand
pub(crate) fn run(args: &Args, verbosity: Verbosity) -> CliResult<()> {
    match &args.command {
        Commands::Solve {
            degree,
            coefficients,
        } => run_solve(args, *degree, coefficients),
        Commands::Precision {
            task,
            operand,
            digits,
            export,
        } => run_precision(
            args,
            verbosity,
            task,
            *operand,
            digits.unwrap_or(DEFAULT_DIGITS),
            export.as_deref(),
        ),
        Commands::Sequence { values } => run_sequence(args, values),
        Commands::Calc { keys } => run_calc(args, keys),
        Commands::Plot { chart } => run_plot(args, chart),
    }
}

fn run_solve(args: &Args, degree: usize, coefficients: &[String]) -> CliResult<()> {
    let coefficients = parse_numbers("coefficient", coefficients)?;
    let poly = Polynomial::with_degree(degree, &coefficients)?;
    let roots = RootSolver::default_config().solve(&poly)?;
    debug!(degree, count = roots.len(), "solved");

    let latex = format_root_set(&roots);
    let report = SolveReport {
        degree,
        coefficients,
        roots: roots
            .distinct(TOLERANCE)
            .iter()
            .map(|r| RootReport {
                re: r.re,
                im: r.im,
                latex: format_root(*r),
            })
            .collect(),
        latex,
    };

    emit(args, &report, || {
        LatexRenderer::new(io::stdout().lock()).render_markup(&report.latex)?;
        Ok(())
    })
}

fn run_precision(
    args: &Args,
    verbosity: Verbosity,
    task: &str,
    operand: Option<u32>,
    digits: usize,
    export: Option<&Path>,
) -> CliResult<()> {
    let task: Task = task.parse()?;
    let request = PrecisionRequest::new(task, operand, digits);
    let mut engine = PrecisionEngine::default_config();
    request.validate(engine.config())?;

    if verbosity > Verbosity::Quiet {
        eprintln_status(args, &format!("Computing {} to {} digits...", task, digits));
    }
    let started = Instant::now();
    let result = engine.compute(&request)?;
    info!(
        task = %task,
        digits,
        iterations = result.iterations,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "precision task finished"
    );

    if verbosity >= Verbosity::Verbose {
        eprintln_status(
            args,
            &format!(
                "{} iterations in {:.3}s",
                result.iterations,
                started.elapsed().as_secs_f64()
            ),
        );
    }

    if let Some(dir) = export {
        fs::create_dir_all(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, &result.value)?;
        if verbosity > Verbosity::Quiet {
            eprintln_status(args, &format!("Wrote {}", path.display()));
        }
    }

    emit(args, &result, || {
        println!("{}", result.value);
        Ok(())
    })
}

fn run_sequence(args: &Args, values: &[String]) -> CliResult<()> {
    let values = parse_numbers("value", values)?;
    let report = SequencePredictor::default_config().predict(&values)?;

    emit(args, &report, || {
        LatexRenderer::new(io::stdout().lock()).render_markup(&report.formula)?;
        let next: Vec<String> = report.predictions.iter().map(f64::to_string).collect();
        println_colored(args, &format!("Next: {}", next.join(", ")), Some(AnsiColors::Green));
        Ok(())
    })
}

fn run_calc(args: &Args, keys: &str) -> CliResult<()> {
    let keys = Key::parse_sequence(keys)?;
    let state = CalculatorState::new().apply_all(keys);

    emit(args, &state, || {
        let color = if state.error {
            AnsiColors::Red
        } else {
            AnsiColors::Default
        };
        println_colored(args, &state.display, Some(color));
        Ok(())
    })
}

fn run_plot(args: &Args, command: &PlotCommand) -> CliResult<()> {
    let samples = args.samples.unwrap_or(DEFAULT_SAMPLES);
    let range = |window: &Window| SampleRange::new(window.start, window.end, samples);

    let report = match command {
        PlotCommand::Derivative {
            function,
            at,
            window,
        } => {
            let func: Function = function.parse()?;
            PlotReport {
                chart: derivative_chart(func, &range(window), *at)?,
                approach: None,
                integral: None,
            }
        }
        PlotCommand::Limit { example, steps } => {
            let example: LimitExample = example.parse()?;
            PlotReport {
                chart: limit_chart(example, &example.window(samples))?,
                approach: Some(example.approach(*steps)),
                integral: None,
            }
        }
        PlotCommand::Taylor {
            function,
            center,
            order,
            window,
        } => {
            let func: Function = function.parse()?;
            PlotReport {
                chart: taylor_chart(func, *center, *order, &range(window))?,
                approach: None,
                integral: None,
            }
        }
        PlotCommand::Integral {
            function,
            from,
            to,
            intervals,
            rule,
        } => {
            let func: Function = function.parse()?;
            let rule: RiemannRule = rule.parse()?;
            let (chart, summary) = integral_chart(func, *from, *to, *intervals, rule, samples)?;
            PlotReport {
                chart,
                approach: None,
                integral: Some(summary),
            }
        }
    };

    emit(args, &report, || {
        render_with_caption(&mut TextChartRenderer::new(io::stdout().lock()), &report.chart)?;
        if let Some(approach) = &report.approach {
            print_approach(args, approach);
        }
        if let Some(summary) = &report.integral {
            print_integral(args, summary);
        }
        Ok(())
    })
}

fn print_approach(args: &Args, approach: &Approach) {
    println!();
    println_colored(args, "Approach", Some(AnsiColors::Cyan));
    for (side, steps) in [("below", &approach.below), ("above", &approach.above)] {
        if steps.is_empty() {
            continue;
        }
        println!("  {}", side);
        for step in steps {
            println!("  {} {}", format_cell(step.x), format_cell(step.value));
        }
    }
}

fn print_integral(args: &Args, summary: &IntegralSummary) {
    println!();
    println_colored(
        args,
        &format!("{} sum, n = {}", summary.rule, summary.intervals),
        Some(AnsiColors::Cyan),
    );
    println!("  exact       {}", format_cell(summary.exact));
    println!("  approximate {}", format_cell(summary.approximation));
    println!("  error       {}", format_cell(summary.error));
}
