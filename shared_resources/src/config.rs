use std::fs;
use std::env;
use std::time::Duration;

use log::warn;

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("a building needs at least 2 floors, got {0}")]
    TooFewFloors(u8),
    #[error("a building needs at least one car")]
    NoCars,
    #[error("{0} must be longer than zero")]
    ZeroDuration(&'static str),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BuildingFile {
    pub num_floors: u8,
    pub num_cars: u8,
}

impl Default for BuildingFile {
    fn default() -> Self {
        BuildingFile { num_floors: 10, num_cars: 3 }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingFile {
    pub travel_ms: u64,
    pub door_open_ms: u64,
    pub door_wait_ms: u64,
    pub door_close_ms: u64,
}

impl Default for TimingFile {
    fn default() -> Self {
        TimingFile {
            travel_ms: 2000,
            door_open_ms: 2500,
            door_wait_ms: 1000,
            door_close_ms: 2500,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub building: BuildingFile,
    #[serde(default)]
    pub timing: TimingFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub travel: Duration,
    pub door_open: Duration,
    pub door_wait: Duration,
    pub door_close: Duration,
}

impl Timing {
    pub fn door_cycle(&self) -> Duration {
        self.door_open + self.door_wait + self.door_close
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::from(TimingFile::default())
    }
}

impl From<TimingFile> for Timing {
    fn from(file: TimingFile) -> Self {
        Timing {
            travel: Duration::from_millis(file.travel_ms),
            door_open: Duration::from_millis(file.door_open_ms),
            door_wait: Duration::from_millis(file.door_wait_ms),
            door_close: Duration::from_millis(file.door_close_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvArgs {
    pub config_path: Option<String>,
    pub num_floors: Option<u8>,
    pub num_cars: Option<u8>,
}

fn read_config_file(config_path: Option<&str>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = config_path {
        let config_contents = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&config_contents)?);
    }
    let config_contents = match fs::read_to_string(CONFIG_FILE) {
        Ok(content) => content,
        Err(_) => match fs::read_to_string(FALLBACK_CONFIG_FILE) {
            Ok(content) => content,
            Err(_) => {
                warn!("No configuration file provided, using default settings...");
                return Ok(ConfigFile::default());
            }
        },
    };
    Ok(serde_json::from_str(&config_contents)?)
}

fn parse_number(flag: &str, value: &str) -> Option<u8> {
    match value.parse::<u8>() {
        Ok(num) => Some(num),
        Err(_) => {
            warn!("{} {} is not a number, skipping...", flag, value);
            None
        }
    }
}

/// Reads `--flag value` pairs. Anything else is reported and skipped.
pub fn parse_env_args<I: IntoIterator<Item = String>>(args: I) -> EnvArgs {
    let args: Vec<String> = args.into_iter().collect();
    let mut env_args = EnvArgs::default();

    let pairs = args.chunks_exact(2);
    for leftover in pairs.remainder() {
        warn!("argument {} has no value, skipping...", leftover);
    }
    for arg_pair in pairs {
        match arg_pair[0].as_str() {
            "--config" => env_args.config_path = Some(arg_pair[1].clone()),
            "--floors" => {
                if let Some(num) = parse_number("floors", &arg_pair[1]) {
                    env_args.num_floors = Some(num);
                }
            }
            "--cars" => {
                if let Some(num) = parse_number("cars", &arg_pair[1]) {
                    env_args.num_cars = Some(num);
                }
            }
            _ => warn!("illegal argument {}, skipping...", arg_pair[0]),
        }
    }
    env_args
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub num_floors: u8,
    pub num_cars: u8,
    pub timing: Timing,
}

impl SimulationConfig {
    pub fn new(num_floors: u8, num_cars: u8) -> Self {
        SimulationConfig {
            num_floors,
            num_cars,
            timing: Timing::default(),
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Configuration for the running program: file first, then command line.
    pub fn get() -> Result<Self, ConfigError> {
        Self::from_env_args(parse_env_args(env::args().skip(1)))
    }

    pub fn from_env_args(env_args: EnvArgs) -> Result<Self, ConfigError> {
        let config_file = read_config_file(env_args.config_path.as_deref())?;
        let config = Self::from_file(config_file, &env_args);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(config_file: ConfigFile, env_args: &EnvArgs) -> Self {
        SimulationConfig {
            num_floors: env_args.num_floors.unwrap_or(config_file.building.num_floors),
            num_cars: env_args.num_cars.unwrap_or(config_file.building.num_cars),
            timing: Timing::from(config_file.timing),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_floors < 2 {
            return Err(ConfigError::TooFewFloors(self.num_floors));
        }
        if self.num_cars == 0 {
            return Err(ConfigError::NoCars);
        }
        let durations = [
            ("travel time", self.timing.travel),
            ("door open time", self.timing.door_open),
            ("door wait time", self.timing.door_wait),
            ("door close time", self.timing.door_close),
        ];
        for (name, duration) in durations {
            if duration.is_zero() {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn default_timing_matches_the_reference_building() {
        let timing = Timing::default();
        assert_eq!(timing.travel, Duration::from_millis(2000));
        assert_eq!(timing.door_open, Duration::from_millis(2500));
        assert_eq!(timing.door_wait, Duration::from_millis(1000));
        assert_eq!(timing.door_close, Duration::from_millis(2500));
        assert_eq!(timing.door_cycle(), Duration::from_millis(6000));
    }

    #[test]
    fn command_line_pairs_are_parsed() {
        let env_args = parse_env_args(args(&["--floors", "12", "--cars", "4", "--config", "x.json"]));
        assert_eq!(env_args.num_floors, Some(12));
        assert_eq!(env_args.num_cars, Some(4));
        assert_eq!(env_args.config_path.as_deref(), Some("x.json"));
    }

    #[test]
    fn bad_arguments_are_skipped() {
        let env_args = parse_env_args(args(&["--floors", "many", "--speed", "2", "--cars"]));
        assert_eq!(env_args, EnvArgs::default());
    }

    #[test]
    fn command_line_overrides_the_file() {
        let file: ConfigFile = serde_json::from_str(
            r#"{ "building": { "num_floors": 6, "num_cars": 2 }, "timing": { "travel_ms": 500 } }"#,
        )
        .unwrap();
        let env_args = EnvArgs { num_cars: Some(5), ..EnvArgs::default() };
        let config = SimulationConfig::from_file(file, &env_args);
        assert_eq!(config.num_floors, 6);
        assert_eq!(config.num_cars, 5);
        assert_eq!(config.timing.travel, Duration::from_millis(500));
        assert_eq!(config.timing.door_open, Duration::from_millis(2500));
    }

    #[test]
    fn partial_building_section_keeps_the_other_default() {
        let file: ConfigFile = serde_json::from_str(r#"{ "building": { "num_floors": 6 } }"#).unwrap();
        assert_eq!(file.building.num_floors, 6);
        assert_eq!(file.building.num_cars, BuildingFile::default().num_cars);
        assert_eq!(file.timing, TimingFile::default());
    }

    #[test]
    fn undersized_buildings_are_rejected() {
        assert!(matches!(
            SimulationConfig::new(1, 2).validate(),
            Err(ConfigError::TooFewFloors(1))
        ));
        assert!(matches!(SimulationConfig::new(5, 0).validate(), Err(ConfigError::NoCars)));
        assert!(SimulationConfig::new(2, 1).validate().is_ok());
    }

    #[test]
    fn zero_durations_are_rejected() {
        let timing = Timing { door_wait: Duration::ZERO, ..Timing::default() };
        let config = SimulationConfig::new(5, 1).with_timing(timing);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDuration("door wait time"))));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let env_args = EnvArgs {
            config_path: Some(String::from("/nonexistent/elevator-bank.json")),
            ..EnvArgs::default()
        };
        assert!(matches!(SimulationConfig::from_env_args(env_args), Err(ConfigError::Io(_))));
    }
}
