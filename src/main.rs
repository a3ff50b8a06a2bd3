#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod session;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, HistoryArgs, LogArgs},
    core::{ConsumptionLog, Tip},
    prelude::*,
    quantity::rate::KilowattHourRate,
    session::Session,
    tables::{
        build_breakdown_table,
        build_entries_table,
        build_estimate_table,
        build_statistics_table,
        build_tip_table,
        build_trend_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let rate = args.rate()?;
    let mut session = Session::load(&args.session_file)?;

    match args.command {
        Command::Profile(profile_args) => {
            let profile = (*profile_args).into_profile();
            info!(
                size = %profile.size,
                n_appliances = profile.appliances.len(),
                "saving the profile…",
            );
            session.save_profile(profile);
            session.save(&args.session_file)?;
            show_estimate(&session, rate)?;
        }
        Command::Estimate => {
            show_estimate(&session, rate)?;
        }
        Command::Log(log_args) => {
            log(&mut session, &log_args)?;
            session.save(&args.session_file)?;
        }
        Command::History(history_args) => {
            history(&session, &history_args);
        }
    }

    info!("done!");
    Ok(())
}

const NO_PROFILE: &str = "no profile saved yet, run `wattlog profile` first";

fn show_estimate(session: &Session, rate: KilowattHourRate) -> Result {
    let profile = session.profile().context(NO_PROFILE)?;
    let estimate = profile.estimate();
    let tip = Tip::advise(estimate.total);
    info!(
        base = ?estimate.base,
        appliances = ?estimate.appliances,
        total = ?estimate.total,
        ?tip,
        "estimated",
    );
    println!("{}", build_estimate_table(estimate, rate));
    println!("{}", build_tip_table(tip));

    let breakdown = profile.appliance_breakdown();
    if !breakdown.is_empty() {
        println!("{}", build_breakdown_table(&breakdown));
    }
    Ok(())
}

#[instrument(skip_all)]
fn log(session: &mut Session, args: &LogArgs) -> Result {
    let date = args.date();
    let actual = args.actual()?;
    let entry = session.log_actual(date, actual).context(NO_PROFILE)?;
    info!(%date, estimated = ?entry.estimated, actual = ?entry.actual, "logged");
    println!("{}", build_entries_table(&[entry]));
    Ok(())
}

#[instrument(skip_all, fields(limit = args.limit))]
fn history(session: &Session, args: &HistoryArgs) {
    let log = session.log();
    if log.is_empty() {
        warn!("no entries yet, add one with `wattlog log`");
        return;
    }

    println!("{}", build_trend_table(&log.trend()));
    println!("{}", build_entries_table(&log.recent_entries(args.limit)));
    if let Some(statistics) = log.statistics() {
        println!("{}", build_statistics_table(statistics));
    } else {
        info!(
            n_entries = log.len(),
            n_required = ConsumptionLog::MIN_STATISTICS_ENTRIES,
            "not enough entries for the statistics",
        );
    }
}
