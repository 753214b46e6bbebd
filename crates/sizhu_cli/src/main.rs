use clap::{Args, Parser, Subcommand};
use sizhu_cycle::{
    DunRule, EarthlyBranch, HeavenlyStem, SexagenaryPillar, TenGod, valid_branches_for,
};
use sizhu_search::{
    ChartReader, ChartReading, DayBoundary, FixedTermCalendar, PillarDeriver, PillarSearchEngine,
    SearchBounds, SearchWindow, TermBoundaryDeriver, parse_signature,
};
use sizhu_solar::{
    AdjustFlags, GeoLocation, Horizon, RiseSetResult, SolarTimeConfig, TrueSolarTimeAdjuster,
    equation_of_time, rise_set,
};
use sizhu_time::{CalendarMoment, jd_to_mjd};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-pillar time normalisation and search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Observer position and standard meridian.
#[derive(Args, Clone, Copy)]
struct Place {
    /// Latitude in degrees (north positive)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Standard meridian of the civil time zone, degrees east
    #[arg(long, default_value = "120", allow_hyphen_values = true)]
    reference_lon: f64,
}

/// Which adjustment steps to apply.
#[derive(Args, Clone, Copy)]
struct Steps {
    /// The reading was taken under daylight saving time
    #[arg(long)]
    dst: bool,
    /// Convert to true local solar time
    #[arg(long)]
    true_solar: bool,
    /// Move 23:00-24:00 to the next day
    #[arg(long)]
    zi: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a civil moment
    Jd {
        /// Civil date/time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        date: String,
    },
    /// Civil moment of a Julian Day
    FromJd {
        /// Julian Day
        jd: f64,
    },
    /// Equation of time for a civil date and place
    Eot {
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
    },
    /// Mean and true local solar time of a civil moment
    TrueSolar {
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
    },
    /// Run the DST → true solar → zi-hour pipeline
    Adjust {
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
        #[command(flatten)]
        steps: Steps,
    },
    /// Rise and set (or twilight) times on a civil date
    RiseSet {
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
        /// sunrise (default), civil, nautical, astronomical or moonrise
        #[arg(long, default_value = "sunrise")]
        horizon: String,
    },
    /// Five-tiger month table or five-rat hour table for a stem
    Dun {
        /// tiger (month pillars from year stem) or rat (hour pillars from day stem)
        #[arg(long)]
        rule: String,
        /// Reference stem, e.g. 甲
        #[arg(long)]
        stem: String,
    },
    /// Branches on which a candidate stem can fall under a dun rule
    ValidBranches {
        /// tiger or rat
        #[arg(long)]
        rule: String,
        /// Year stem (tiger) or day stem (rat)
        #[arg(long)]
        reference: String,
        /// Month or hour stem to place
        #[arg(long)]
        candidate: String,
    },
    /// Attributes of one sexagenary pillar
    Pillar {
        /// Two-character pillar name, e.g. 甲子
        name: String,
    },
    /// Four pillars of a civil moment, no adjustment
    Derive {
        #[arg(long)]
        date: String,
        /// Change the day pillar at midnight instead of 23:00
        #[arg(long)]
        midnight_day_boundary: bool,
    },
    /// Adjust a civil moment and read its four-pillar chart
    Chart {
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: Place,
        #[command(flatten)]
        steps: Steps,
        /// Change the day pillar at midnight instead of 23:00
        #[arg(long)]
        midnight_day_boundary: bool,
    },
    /// Every civil bracket whose four pillars match the query
    Search {
        /// Year pillar, e.g. 甲子
        year: String,
        /// Month pillar
        month: String,
        /// Day pillar
        day: String,
        /// Hour pillar
        hour: String,
        /// First year of the window (default: --min-year)
        #[arg(long)]
        start: Option<i32>,
        /// Last year of the window (default: --max-year)
        #[arg(long)]
        end: Option<i32>,
        /// Earliest year the engine accepts
        #[arg(long, default_value = "1901")]
        min_year: i32,
        /// Latest year the engine accepts
        #[arg(long, default_value = "2099")]
        max_year: i32,
        /// Change the day pillar at midnight instead of 23:00
        #[arg(long)]
        midnight_day_boundary: bool,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_moment(s: &str) -> CalendarMoment {
    s.parse().unwrap_or_else(|e| fail(e))
}

fn require_location(place: &Place) -> GeoLocation {
    GeoLocation::new(place.lon, place.lat).unwrap_or_else(|e| fail(e))
}

fn solar_config(place: &Place) -> SolarTimeConfig {
    SolarTimeConfig::with_reference_longitude(place.reference_lon)
}

fn adjust_flags(steps: &Steps) -> AdjustFlags {
    AdjustFlags {
        apply_dst: steps.dst,
        apply_true_solar: steps.true_solar,
        apply_early_late_zi: steps.zi,
    }
}

fn parse_dun_rule(s: &str) -> Option<DunRule> {
    match s.to_ascii_lowercase().as_str() {
        "tiger" | "five-tiger" | "month" => Some(DunRule::FiveTiger),
        "rat" | "five-rat" | "hour" => Some(DunRule::FiveRat),
        _ => None,
    }
}

fn require_dun_rule(s: &str) -> DunRule {
    parse_dun_rule(s).unwrap_or_else(|| {
        eprintln!("Invalid rule: {s}");
        fail("Valid: tiger, rat")
    })
}

fn parse_stem(s: &str) -> Option<HeavenlyStem> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => HeavenlyStem::from_char(c),
        _ => None,
    }
}

fn require_stem(s: &str) -> HeavenlyStem {
    parse_stem(s).unwrap_or_else(|| fail(format!("Invalid stem: {s} (甲 乙 丙 丁 戊 己 庚 辛 壬 癸)")))
}

fn parse_horizon(s: &str) -> Option<Horizon> {
    match s.to_ascii_lowercase().as_str() {
        "sunrise" | "sun" => Some(Horizon::Sunrise),
        "civil" => Some(Horizon::CivilTwilight),
        "nautical" => Some(Horizon::NauticalTwilight),
        "astronomical" => Some(Horizon::AstronomicalTwilight),
        "moonrise" | "moon" => Some(Horizon::Moonrise),
        _ => None,
    }
}

fn day_boundary(midnight: bool) -> DayBoundary {
    if midnight {
        DayBoundary::Midnight
    } else {
        DayBoundary::ZiHour
    }
}

fn deriver(midnight: bool) -> TermBoundaryDeriver<FixedTermCalendar> {
    TermBoundaryDeriver::new(FixedTermCalendar).with_day_boundary(day_boundary(midnight))
}

fn print_pillar_line(label: &str, p: SexagenaryPillar) {
    println!(
        "  {label:<6} {}  {}{}  na-yin {}  xun-kong {}{}",
        p,
        p.stem().element().chinese(),
        p.branch().element().chinese(),
        p.na_yin(),
        p.xun_kong()[0],
        p.xun_kong()[1],
    );
}

fn print_chart(chart: &ChartReading) {
    println!("Civil:    {}", chart.civil);
    println!("Adjusted: {}", chart.adjusted);
    println!("Pillars:  {}", chart.signature);
    for (label, reading) in ["year", "month", "day", "hour"].iter().zip(&chart.pillars) {
        print_pillar_line(label, reading.pillar);
        let god = reading.ten_god.map_or("日主", TenGod::chinese);
        let hidden: Vec<String> = reading
            .hidden_stems
            .iter()
            .map(|h| format!("{}{}", h.stem, h.ten_god.short()))
            .collect();
        println!(
            "         {god}  hidden {}  star luck {}  self seat {}",
            hidden.join(" "),
            reading.star_luck,
            reading.self_seat,
        );
    }
    println!("Hour bracket: {}", chart.signature.hour.branch().bracket_label());
    println!("Fetal origin: {}", chart.fetal_origin);
    let seasonal: Vec<String> = chart
        .seasonal
        .iter()
        .map(|(e, s)| format!("{}{}", e.chinese(), s.chinese()))
        .collect();
    println!("Season:       {}", seasonal.join(" "));
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd { date } => {
            let t = parse_moment(&date);
            let jd = t.to_julian_day();
            println!("{t}");
            println!("JD  {jd:.6}");
            println!("MJD {:.6}", jd_to_mjd(jd));
            println!("JDN {}", t.day_number());
        }

        Commands::FromJd { jd } => {
            if !jd.is_finite() {
                fail(format!("Invalid Julian Day: {jd}"));
            }
            println!("{}", CalendarMoment::from_julian_day(jd));
        }

        Commands::Eot { date, place } => {
            let t = parse_moment(&date);
            let loc = require_location(&place);
            let config = solar_config(&place);
            let eot = equation_of_time(&t, &loc, &config);
            println!("Equation of time: {:+.3} min ({:?})", eot.minutes, eot.method);
            println!(
                "Longitude offset: {:+.3} min",
                config.longitude_offset_minutes(loc.longitude_deg())
            );
        }

        Commands::TrueSolar { date, place } => {
            let t = parse_moment(&date);
            let loc = require_location(&place);
            let adjuster = TrueSolarTimeAdjuster::new(solar_config(&place));
            println!("Civil:      {t}");
            println!("Mean solar: {}", adjuster.mean_solar_time(&t, &loc));
            println!("True solar: {}", adjuster.true_solar_time(&t, &loc));
        }

        Commands::Adjust { date, place, steps } => {
            let t = parse_moment(&date);
            let loc = require_location(&place);
            let flags = adjust_flags(&steps);
            let adjusted = TrueSolarTimeAdjuster::new(solar_config(&place)).adjust(&t, &loc, flags);
            debug!(?flags, "adjusted");
            println!("{adjusted}");
        }

        Commands::RiseSet {
            date,
            place,
            horizon,
        } => {
            let t = parse_moment(&date);
            let loc = require_location(&place);
            let horizon = parse_horizon(&horizon).unwrap_or_else(|| {
                eprintln!("Invalid horizon: {horizon}");
                fail("Valid: sunrise, civil, nautical, astronomical, moonrise")
            });
            match rise_set(&t, &loc, horizon, &solar_config(&place)) {
                RiseSetResult::Events { rise, set } => {
                    let show = |m: Option<CalendarMoment>| {
                        m.map_or_else(|| "none".to_string(), |m| m.to_string())
                    };
                    println!("{} rise: {}", horizon.name(), show(rise));
                    println!("{} set:  {}", horizon.name(), show(set));
                }
                RiseSetResult::AlwaysAbove => println!("{}: above the horizon all day", horizon.name()),
                RiseSetResult::AlwaysBelow => println!("{}: below the horizon all day", horizon.name()),
            }
        }

        Commands::Dun { rule, stem } => {
            let rule = require_dun_rule(&rule);
            let stem = require_stem(&stem);
            println!("{} from {}: starts at {}", rule.name(), stem, rule.start_stem(stem));
            for position in 0..12u8 {
                let p = rule.pillar_at(stem, position);
                match rule {
                    DunRule::FiveTiger => println!("  month {:>2}  {}", position + 1, p),
                    DunRule::FiveRat => {
                        println!("  {}  {}", p.branch().bracket_label(), p)
                    }
                }
            }
        }

        Commands::ValidBranches {
            rule,
            reference,
            candidate,
        } => {
            let rule = require_dun_rule(&rule);
            let reference = require_stem(&reference);
            let candidate = require_stem(&candidate);
            let branches: Vec<EarthlyBranch> = valid_branches_for(reference, candidate, rule);
            if branches.is_empty() {
                println!("none");
            }
            for b in branches {
                println!("{}{}  {}", candidate, b, b.bracket_label());
            }
        }

        Commands::Pillar { name } => {
            let p: SexagenaryPillar = name.parse().unwrap_or_else(|e| fail(e));
            println!("{} (cycle index {})", p, p.cycle_index());
            println!(
                "Stem:   {} {} {} {}",
                p.stem(),
                p.stem().pinyin(),
                p.stem().polarity().name(),
                p.stem().element().name()
            );
            println!(
                "Branch: {} {} {} {} ({})",
                p.branch(),
                p.branch().pinyin(),
                p.branch().polarity().name(),
                p.branch().element().name(),
                p.branch().animal()
            );
            println!("Na-yin: {}", p.na_yin());
            println!("Xun-kong: {}{}", p.xun_kong()[0], p.xun_kong()[1]);
            println!("Fetal origin (as month pillar): {}", p.fetal_origin());
        }

        Commands::Derive {
            date,
            midnight_day_boundary,
        } => {
            let t = parse_moment(&date);
            let sig = deriver(midnight_day_boundary).derive_pillars(&t);
            println!("{sig}");
        }

        Commands::Chart {
            date,
            place,
            steps,
            midnight_day_boundary,
        } => {
            let t = parse_moment(&date);
            let reader = ChartReader::new(
                deriver(midnight_day_boundary),
                TrueSolarTimeAdjuster::new(solar_config(&place)),
            );
            let chart = reader
                .read_at(&t, place.lon, place.lat, adjust_flags(&steps))
                .unwrap_or_else(|e| fail(e));
            print_chart(&chart);
        }

        Commands::Search {
            year,
            month,
            day,
            hour,
            start,
            end,
            min_year,
            max_year,
            midnight_day_boundary,
        } => {
            let signature = parse_signature(&year, &month, &day, &hour).unwrap_or_else(|e| fail(e));
            let engine = PillarSearchEngine::new(deriver(midnight_day_boundary))
                .with_bounds(SearchBounds { min_year, max_year })
                .unwrap_or_else(|e| fail(e));
            let window = SearchWindow::new(start.unwrap_or(min_year), end.unwrap_or(max_year));
            let hits = engine.search(&signature, window).unwrap_or_else(|e| fail(e));
            println!(
                "{signature}: {} match(es) in {}..={}",
                hits.len(),
                window.start_year,
                window.end_year
            );
            for hit in &hits {
                println!(
                    "  {:04}-{:02}-{:02}  {}",
                    hit.moment.year(),
                    hit.moment.month(),
                    hit.moment.day(),
                    hit.hour_label()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dun_rule_names() {
        assert_eq!(parse_dun_rule("tiger"), Some(DunRule::FiveTiger));
        assert_eq!(parse_dun_rule("RAT"), Some(DunRule::FiveRat));
        assert_eq!(parse_dun_rule("ox"), None);
    }

    #[test]
    fn stems_are_single_characters() {
        assert_eq!(parse_stem("甲"), Some(HeavenlyStem::Jia));
        assert_eq!(parse_stem(" 癸 "), Some(HeavenlyStem::Gui));
        assert_eq!(parse_stem("甲子"), None);
        assert_eq!(parse_stem(""), None);
    }

    #[test]
    fn horizon_names() {
        assert_eq!(parse_horizon("civil"), Some(Horizon::CivilTwilight));
        assert_eq!(parse_horizon("moon"), Some(Horizon::Moonrise));
        assert_eq!(parse_horizon("noon"), None);
    }

    #[test]
    fn search_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sizhu", "search", "甲子", "丙寅", "甲子", "甲子", "--start", "1920", "--end", "1930",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { start, end, min_year, .. } => {
                assert_eq!((start, end, min_year), (Some(1920), Some(1930), 1901));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn negative_longitude_is_accepted() {
        let cli = Cli::try_parse_from([
            "sizhu", "eot", "--date", "2024-04-15", "--lat", "40.7", "--lon", "-74",
            "--reference-lon", "-75",
        ])
        .unwrap();
        match cli.command {
            Commands::Eot { place, .. } => {
                assert_eq!(place.lon, -74.0);
                assert_eq!(place.reference_lon, -75.0);
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
