//! Heart Risk Predictor - desktop client for a heart attack risk service
//!
//! Sends eight patient fields to the service's `/predict` endpoint and shows
//! the answer as a label, a gauge chart and a list of suggestions.

mod charts;
mod gui;
mod prediction;

use anyhow::{bail, Context};
use charts::{GaugeExporter, DEFAULT_SIZE};
use clap::{Args, Parser, Subcommand};
use eframe::egui;
use gui::PredictorApp;
use prediction::{HttpPredictionClient, PatientInput, PredictionController, DEFAULT_SERVER};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "heart-risk-predictor")]
#[command(about = "Heart attack risk prediction client")]
struct Cli {
    /// Base URL of the prediction service
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one prediction without opening a window
    Predict {
        #[command(flatten)]
        patient: PatientArgs,

        /// Write the gauge chart to this PNG file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

/// Field values are passed through unchanged
#[derive(Args)]
struct PatientArgs {
    #[arg(long)]
    age: String,
    #[arg(long)]
    sex: String,
    #[arg(long)]
    cholesterol: String,
    #[arg(long)]
    max_hr: String,
    #[arg(long)]
    oldpeak: String,
    #[arg(long)]
    exercise_angina: String,
    #[arg(long)]
    chest_pain: String,
    #[arg(long)]
    st_slope: String,
}

impl From<PatientArgs> for PatientInput {
    fn from(args: PatientArgs) -> Self {
        Self {
            age: args.age,
            sex: args.sex,
            cholesterol: args.cholesterol,
            max_hr: args.max_hr,
            oldpeak: args.oldpeak,
            exercise_angina: args.exercise_angina,
            chest_pain: args.chest_pain,
            st_slope: args.st_slope,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let client = HttpPredictionClient::new(&cli.server);
    log::info!("Using prediction endpoint {}", client.endpoint());

    match cli.command {
        Some(Commands::Predict { patient, export }) => run_headless(&client, patient.into(), export),
        None => run_gui(client),
    }
}

fn run_headless(
    client: &HttpPredictionClient,
    input: PatientInput,
    export: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut controller = PredictionController::new();
    controller.run(client, &input);

    println!("{}", controller.result_text());
    if controller.is_error() {
        bail!("prediction failed");
    }

    if let Some(chart) = controller.gauge().current() {
        let [risk, safe] = &chart.data().segments;
        println!(
            "{}: {}% / {}: {}%",
            risk.label,
            risk.value.round() as i64,
            safe.label,
            safe.value.round() as i64
        );

        if let Some(path) = export {
            GaugeExporter::export_png(chart.data(), &path, DEFAULT_SIZE)
                .with_context(|| format!("exporting gauge to {}", path.display()))?;
        }
    }

    if let Some(suggestions) = controller.suggestions() {
        for item in suggestions.items() {
            println!("  - {}", item);
        }
    }

    Ok(())
}

fn run_gui(client: HttpPredictionClient) -> anyhow::Result<()> {
    let client: Arc<dyn prediction::PredictionClient> = Arc::new(client);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Heart Risk Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Heart Risk Predictor",
        options,
        Box::new(move |cc| Ok(Box::new(PredictorApp::new(cc, client)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start window: {}", e))
}
