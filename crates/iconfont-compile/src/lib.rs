// this_file: crates/iconfont-compile/src/lib.rs

//! Font compilation through an external `fantasticon` process.
//!
//! The compiler reads its settings from a JSON file, so [`FantasticonCompiler`]
//! serializes the [`FontConfig`] next to the intermediate SVGs, runs
//! `fantasticon --config <file>`, and then reads back what it wrote:
//!
//! - the codepoint map (`<name>.json`) when the json asset was requested,
//!   otherwise codepoints are assigned to the sorted SVG stems
//! - the list of font and asset files present in the output directory
//!
//! The process is bounded by a deadline and killed when it overruns.

use camino::Utf8Path;
use iconfont_core::{CompileError, CompileOutput, FontCompiler, FontConfig};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Executable looked up on `PATH` by default
pub const DEFAULT_PROGRAM: &str = "fantasticon";
/// How long a compile may take before it is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
/// Config file written into the input directory
pub const CONFIG_FILE_NAME: &str = ".fantasticonrc.json";
/// First codepoint fantasticon hands out
pub const FIRST_CODEPOINT: u32 = 0xf101;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs the fantasticon CLI as a child process
#[derive(Debug, Clone)]
pub struct FantasticonCompiler {
    program: OsString,
    args: Vec<OsString>,
    timeout: Duration,
}

impl FantasticonCompiler {
    pub fn new() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different executable (e.g. `npx`)
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments placed before `--config` (e.g. `fantasticon` when running through `npx`)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn write_config(&self, config: &FontConfig) -> Result<PathBuf, CompileError> {
        let path = config.input_dir.join(CONFIG_FILE_NAME).into_std_path_buf();
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| CompileError::Config(format!("cannot serialize config: {}", e)))?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    fn run(&self, config_path: &std::path::Path) -> Result<(), CompileError> {
        let program = self.program.to_string_lossy().into_owned();
        log::info!("Running {} with config {}", program, config_path.display());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg("--config")
            .arg(config_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CompileError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().map(|s| thread::spawn(move || drain(s)));
        let stderr = child.stderr.take().map(|s| thread::spawn(move || drain(s)));

        let status = match wait_with_deadline(&mut child, self.timeout)? {
            Some(status) => status,
            None => {
                log::warn!("{} exceeded {:?}, killing it", program, self.timeout);
                let _ = child.kill();
                let _ = child.wait();
                return Err(CompileError::Timeout(self.timeout));
            },
        };

        let stdout = stdout.map(|h| h.join().unwrap_or_default()).unwrap_or_default();
        let stderr = stderr.map(|h| h.join().unwrap_or_default()).unwrap_or_default();
        if !stdout.trim().is_empty() {
            log::debug!("{} stdout:\n{}", program, stdout.trim_end());
        }

        if status.success() {
            Ok(())
        } else {
            let message = if stderr.trim().is_empty() { stdout } else { stderr };
            Err(CompileError::Exited {
                status: status.to_string(),
                stderr: message.trim().to_string(),
            })
        }
    }
}

impl Default for FantasticonCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCompiler for FantasticonCompiler {
    fn name(&self) -> &'static str {
        "fantasticon"
    }

    fn compile(&self, config: &FontConfig) -> Result<CompileOutput, CompileError> {
        config.validate()?;
        std::fs::create_dir_all(&config.output_dir)?;

        let config_path = self.write_config(config)?;
        self.run(&config_path)?;

        let codepoints = if config.emits_codepoint_map() {
            read_codepoint_map(&config.asset_path("json"))?
        } else {
            assign_codepoints(&config.input_dir, &config.codepoints)?
        };

        Ok(CompileOutput {
            codepoints,
            assets: existing_assets(config),
        })
    }
}

fn drain(mut reader: impl Read) -> String {
    let mut buf = Vec::new();
    let _ = reader.read_to_end(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// `None` when the deadline passed first
fn wait_with_deadline(
    child: &mut std::process::Child,
    timeout: Duration,
) -> Result<Option<ExitStatus>, CompileError> {
    // A timeout too large to represent means no deadline at all
    let deadline = Instant::now().checked_add(timeout);
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Parse the `{ "icon-name": 61697, ... }` map fantasticon writes
pub fn read_codepoint_map(path: &Utf8Path) -> Result<BTreeMap<String, u32>, CompileError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CompileError::Manifest(format!("{}: {}", path, e)))?;
    serde_json::from_str(&text).map_err(|e| CompileError::Manifest(format!("{}: {}", path, e)))
}

/// Codepoints for every `*.svg` in `input_dir`, keeping seeded entries and
/// numbering the rest in name order after the highest one in use.
pub fn assign_codepoints(
    input_dir: &Utf8Path,
    seed: &BTreeMap<String, u32>,
) -> Result<BTreeMap<String, u32>, CompileError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "svg") {
            names.push(iconfont_core::icon_name(&path));
        }
    }
    names.sort();

    let mut next = seed
        .values()
        .max()
        .map_or(FIRST_CODEPOINT, |&max| max.saturating_add(1).max(FIRST_CODEPOINT));
    let mut codepoints = BTreeMap::new();
    for name in names {
        let codepoint = match seed.get(&name) {
            Some(&cp) => cp,
            None => {
                let cp = next;
                next += 1;
                cp
            },
        };
        codepoints.insert(name, codepoint);
    }
    Ok(codepoints)
}

fn existing_assets(config: &FontConfig) -> Vec<PathBuf> {
    let fonts = config.font_types.iter().map(|t| t.as_str());
    let assets = config.asset_types.iter().map(|t| t.as_str());
    fonts
        .chain(assets)
        .map(|ext| config.asset_path(ext).into_std_path_buf())
        .filter(|path| path.exists())
        .collect()
}
