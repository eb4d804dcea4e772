use log::LevelFilter;

use crate::DemoError;

/// Keys inserted when none are given on the command line
pub const DEFAULT_KEYS: [i64; 12] = [30, 10, 20, 50, 40, 5, 4, 60, 70, 24, 34, 33];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub keys: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            keys: DEFAULT_KEYS.to_vec(),
        }
    }
}

impl Config {
    /// Parses the command line arguments, not including the program name
    ///
    /// `-v`/`--verbose` enables trace logging. Every other argument is a key to insert. If no keys
    /// are given, `DEFAULT_KEYS` is used.
    pub fn from_args<I, S>(args: I) -> Result<Self, DemoError>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut keys = Vec::new();

        for arg in args {
            match arg.as_ref() {
                "-v" | "--verbose" => config.log_level = LevelFilter::Trace,
                arg => {
                    let key = arg.parse::<i64>().map_err(|source| DemoError::InvalidKey {
                        arg: arg.to_string(),
                        source,
                    })?;
                    keys.push(key);
                },
            }
        }

        if !keys.is_empty() {
            config.keys = keys;
        }

        Ok(config)
    }
}
