mod cli;

use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands, LocationArgs};
use cropcast::config::Config;
use cropcast::datasources::SnapshotProvider;
use cropcast::error::Result;
use cropcast::logic::regional::{DEFAULT_REGION, REGION_GROUPS};
use cropcast::logic::{Assembly, PredictionEngine, RecordAssembler, SourceStatus};
use cropcast::models::{AgriculturalInputRecord, Coordinate, PredictionResult};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Predict { location, crop } => run_predict(&config, &location, crop.as_deref()),
        Commands::Estimate { location } => run_estimate(&config, &location),
        Commands::Regions { json } => run_regions(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Location, date and providers resolved from flags with config fallbacks.
struct Request {
    coordinate: Coordinate,
    name: String,
    date: NaiveDate,
    assembler: RecordAssembler,
}

impl Request {
    fn resolve(config: &Config, args: &LocationArgs) -> Result<Self> {
        let (coordinate, name) = config
            .location
            .resolve(args.lat, args.lon, args.name.as_deref())?;
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());

        let mut assembler = RecordAssembler::new();
        if let Some(path) = &args.snapshot {
            let provider = SnapshotProvider::load(path)?;
            assembler = assembler.with_provider(Arc::new(provider));
        } else if let Some(path) = config.snapshot_path() {
            match SnapshotProvider::load(path) {
                Ok(provider) => assembler = assembler.with_provider(Arc::new(provider)),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    "Configured snapshot unavailable, using estimates: {}",
                    e
                ),
            }
        }

        Ok(Self {
            coordinate,
            name,
            date,
            assembler,
        })
    }

    fn assemble(&self, target_crop: Option<&str>) -> Assembly {
        self.assembler
            .assemble(self.coordinate, &self.name, target_crop, self.date)
    }
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    date: NaiveDate,
    sources: SourceStatus,
    record: &'a AgriculturalInputRecord,
}

#[derive(Serialize)]
struct PredictionReport<'a> {
    date: NaiveDate,
    sources: SourceStatus,
    record: &'a AgriculturalInputRecord,
    prediction: &'a PredictionResult,
    yield_text: String,
}

fn run_predict(config: &Config, args: &LocationArgs, crop: Option<&str>) -> Result<()> {
    let request = Request::resolve(config, args)?;
    let assembly = request.assemble(crop);

    let engine = PredictionEngine::new().with_data_quality(config.scoring.data_quality);
    let prediction = engine.predict_checked(&assembly.record, request.date)?;

    if args.json {
        let report = PredictionReport {
            date: request.date,
            sources: assembly.status,
            record: &assembly.record,
            prediction: &prediction,
            yield_text: prediction.yield_text(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header(&assembly, request.date);
    let risks = if prediction.risk_factors.is_empty() {
        "none".to_string()
    } else {
        prediction
            .risk_factors
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!();
    println!("Recommended crops:  {}", prediction.crops);
    println!("Expected yield:     {}", prediction.yield_text());
    println!("Planting season:    {}", prediction.season_text);
    println!("Irrigation:         {}", prediction.irrigation_text);
    println!("Soil suitability:   {}", prediction.soil_suitability);
    println!("Climate match:      {}", prediction.climate_match);
    println!("Risk level:         {} ({})", prediction.risk_level, risks);
    println!(
        "Confidence:         {}% (data quality {}%)",
        prediction.confidence, prediction.data_quality
    );
    Ok(())
}

fn run_estimate(config: &Config, args: &LocationArgs) -> Result<()> {
    let request = Request::resolve(config, args)?;
    let assembly = request.assemble(None);
    let record = &assembly.record;

    if args.json {
        let report = EstimateReport {
            date: request.date,
            sources: assembly.status,
            record,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header(&assembly, request.date);

    let w = &record.weather;
    println!();
    println!("Weather  [{}]", w.source);
    println!("  Temperature:      {:.0} °C", w.temperature_c);
    println!("  Humidity:         {:.0}%", w.humidity_pct);
    println!("  Annual rainfall:  {:.0} mm", w.annual_rainfall_mm);
    println!("  Wind:             {:.0} km/h", w.wind_speed_kmh);
    println!("  Sunlight:         {:.1} h", w.sunlight_hours);
    println!("  Pressure:         {:.0} hPa", w.pressure_hpa);
    println!("  UV index:         {:.0}", w.uv_index);
    println!("  Season:           {}", w.season);

    let s = &record.soil;
    println!();
    println!("Soil  [{}]", s.source);
    println!("  Type:             {}", s.soil_type);
    println!("  pH:               {:.1}", s.ph);
    println!(
        "  N / P / K:        {:.0} / {:.0} / {:.0} mg/kg",
        s.nitrogen_mg_kg, s.phosphorus_mg_kg, s.potassium_mg_kg
    );
    println!("  Organic carbon:   {:.1}%", s.organic_carbon_pct);
    println!("  Moisture:         {:.0}%", s.moisture_pct);
    println!("  Drainage:         {}", s.drainage);
    println!("  Fertility:        {}", s.fertility);

    let r = &record.regional;
    println!();
    println!("Region  [{}]", r.source);
    println!("  Zone:             {}", r.agri_zone);
    println!("  Common crops:     {}", r.common_crops.join(", "));
    println!("  Farm size:        {}", r.avg_farm_size);
    println!("  Irrigation:       {}", r.irrigation_type);
    println!("  Fertilizer:       {}", r.fertilizer_usage);
    println!("  Season:           {}", r.crop_season);
    println!("  Crop intensity:   {}", r.crop_intensity);
    println!("  Market access:    {}", r.market_access);
    if let Some(climate) = &r.climate {
        println!("  Observed temp:    {:.1} °C", climate.avg_temp_c);
        println!("  Observed rain:    {:.0} mm", climate.total_rainfall_mm);
        if let Some(humidity) = climate.avg_humidity_pct {
            println!("  Observed humid.:  {:.0}%", humidity);
        }
    }
    Ok(())
}

fn run_regions(json: bool) -> Result<()> {
    let groups = REGION_GROUPS.iter().chain(std::iter::once(&DEFAULT_REGION));

    if json {
        let list: Vec<serde_json::Value> = groups
            .map(|g| {
                serde_json::json!({
                    "zone": g.zone,
                    "keywords": g.keywords,
                    "crops": g.crops,
                    "farm_size": g.farm_size,
                    "irrigation": g.irrigation,
                    "fertilizer": g.fertilizer,
                    "intensity": g.intensity,
                    "market_access": g.market,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    for group in groups {
        let keywords = if group.keywords.is_empty() {
            "(default)".to_string()
        } else {
            group.keywords.join(", ")
        };
        println!("{}", group.zone);
        println!("  Matches:  {}", keywords);
        println!("  Crops:    {}", group.crops.join(", "));
        println!("  Market:   {}  Intensity: {}", group.market, group.intensity);
    }
    Ok(())
}

fn print_header(assembly: &Assembly, date: NaiveDate) {
    let record = &assembly.record;
    println!("{} ({}) on {}", record.location_name, record.coordinate, date);
    println!("Inputs: {}", assembly.status.summary());
}
