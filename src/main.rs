use colored::Colorize;
use std::process;
use std::thread;
use std::time::Duration;

use stream_sentinel::config::{load_config, Config};
use stream_sentinel::generator::StreamGenerator;
use stream_sentinel::utils::log::{log_to_file, VerdictLog};
use stream_sentinel::visualization::plotter::create_shared_plotter;
use stream_sentinel::visualization::window::StreamWindow;
use stream_sentinel::Detector;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let config = load_or_default(args.get(2));
    match args[1].as_str() {
        "live" => run_live(config),
        "print" => run_print(config),
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: stream-sentinel <live|print> [config.yaml]");
    eprintln!("  live   run the stream against a real-time plot window");
    eprintln!("  print  run the stream to completion, printing each verdict");
}

fn load_or_default(path: Option<&String>) -> Config {
    match path {
        Some(path) => load_config(path).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        }),
        None => Config::default(),
    }
}

fn build_detector(config: &Config) -> Detector {
    Detector::new(config.detector.threshold).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    })
}

fn open_verdict_log(config: &Config) -> Option<VerdictLog> {
    if !config.logging.enabled {
        return None;
    }
    match VerdictLog::open(&config.logging.verdict_file) {
        Ok(log) => Some(log),
        Err(e) => {
            eprintln!("Failed to open verdict log: {}", e);
            None
        }
    }
}

fn run_print(config: Config) {
    let mut detector = build_detector(&config);
    let mut verdict_log = open_verdict_log(&config);
    let generator = StreamGenerator::new(config.generator.clone());

    let mut anomaly_indices = Vec::new();
    for reading in generator {
        // The generator only emits finite values, so observe cannot fail here.
        let verdict = match detector.observe(reading) {
            Ok(verdict) => verdict,
            Err(e) => {
                eprintln!("Skipping reading: {}", e);
                continue;
            }
        };

        // Bar rendering capped so large spikes don't wrap the terminal.
        let bar_len = ((verdict.value.max(0.0) * 3.0) as usize).min(80);
        let bar = "|".repeat(bar_len);

        if verdict.anomalous {
            anomaly_indices.push(verdict.index);
            println!(
                "{:>5} {:>10.3} {} {}",
                verdict.index,
                verdict.value,
                bar.red(),
                "ANOMALY".red().bold()
            );
            if config.logging.enabled {
                let message = format!(
                    "anomaly at index {}: value {}",
                    verdict.index, verdict.value
                );
                if let Err(e) = log_to_file(&config.logging.run_log, &message) {
                    eprintln!("Failed to write run log: {}", e);
                }
            }
        } else {
            println!("{:>5} {:>10.3} {}", verdict.index, verdict.value, bar.white());
        }

        if let Some(log) = verdict_log.as_mut() {
            if let Err(e) = log.record(&verdict) {
                eprintln!("Failed to record verdict: {}", e);
            }
        }
    }

    println!(
        "\n{} readings, {} anomalies {:?}",
        detector.statistics().count(),
        anomaly_indices.len(),
        anomaly_indices
    );
}

fn run_live(config: Config) {
    let mut detector = build_detector(&config);
    let mut verdict_log = open_verdict_log(&config);
    let generator = StreamGenerator::new(config.generator.clone());

    let plotter = create_shared_plotter(config.visualization.clone());
    let feed_plotter = plotter.clone();
    let interval = Duration::from_millis(config.visualization.update_interval_ms);

    // Single owner thread drives the detector serially; the window only
    // reads the shared plotter. Detached on purpose: a closed window ends
    // the run and the process.
    thread::spawn(move || {
        for reading in generator {
            let verdict = match detector.observe(reading) {
                Ok(verdict) => verdict,
                Err(_) => continue,
            };
            feed_plotter.lock().unwrap().push(&verdict);
            if let Some(log) = verdict_log.as_mut() {
                let _ = log.record(&verdict);
            }
            thread::sleep(interval);
        }
        feed_plotter.lock().unwrap().mark_finished();
    });

    if let Err(e) = StreamWindow::run(plotter, config.visualization) {
        eprintln!("Visualization window error: {}", e);
        process::exit(1);
    }
}
