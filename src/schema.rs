//! Column registry for the controller's CSV export.
//!
//! The export carries no trustworthy header row: columns are strictly
//! positional and must line up with the vocabulary below. A mismatch here
//! silently corrupts every downstream metric, so the registry is validated
//! once at construction and every lookup that fails to resolve is a
//! configuration error, never a fallback.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while building or querying the column registry
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// Two columns share a name; positional resolution would be ambiguous
    #[error("duplicate column name: {0}")]
    Duplicate(String),

    /// A signal name does not exist in the registry
    #[error("unknown signal: {0}")]
    Unknown(String),

    /// A data row's field count disagrees with the registry width
    #[error("column count mismatch: registry has {expected}, row has {got}")]
    Width { expected: usize, got: usize },
}

/// Signal names referenced by the metric and window-extraction code.
///
/// These must match entries in [`COLUMN_NAMES`] exactly; `Schema::new`
/// asserts as much so a typo fails at startup rather than mid-report.
pub mod signal {
    pub const TIME: &str = "time";
    pub const THROTTLE: &str = "commanded throttle actuator control";
    pub const TIMING: &str = "ignition timing advance for #1 cylinder";
    pub const ENGINE_RPM: &str = "engine rpm";
    pub const GEAR: &str = "gear";
    pub const LAMBDA_BANK1: &str = "lamb_ls_up[1]";
    pub const MANIFOLD_PRESSURE: &str = "map_mes";
    pub const AMBIENT_PRESSURE: &str = "amp_mes";
    pub const AMBIENT_TEMP: &str = "ambient air temperature";
    pub const PUMP_DUTY: &str = "pump_vol_vcv";

    /// Per-cylinder knock retard channels, index-aligned to cylinder number
    pub const KNOCK: [&str; 6] = [
        "iga_ad_1_knk[0]",
        "iga_ad_1_knk[1]",
        "iga_ad_1_knk[2]",
        "iga_ad_1_knk[3]",
        "iga_ad_1_knk[4]",
        "iga_ad_1_knk[5]",
    ];
}

/// Column order of the controller's datalog export. Positional: the file's
/// own header rows are ignored entirely.
pub const COLUMN_NAMES: [&str; 49] = [
    "time",
    "milliseconds",
    "tia",
    "tia_am_scha",
    "tqi_gs_fast_dec",
    "tqi_gs_fast_inc",
    "pv_av",
    "lamb_ls_up[1]",
    "lamb_ls_up[2]",
    "state_eng",
    "teg_dyn_up_cat[1]",
    "teg_dyn_up_cat[2]",
    "fup",
    "fup_sp",
    "pump_vol_vcv",
    "efppwm",
    "fup_efp",
    "iga_av_mv",
    "ti_1_hom[0]",
    "ti_1_hom[3]",
    "amp_mes",
    "map",
    "map_mes",
    "map_1_mes",
    "map_2_mes",
    "pdt_mes",
    "maf",
    "iga_ad_1_knk[0]",
    "iga_ad_1_knk[1]",
    "iga_ad_1_knk[2]",
    "iga_ad_1_knk[3]",
    "iga_ad_1_knk[4]",
    "iga_ad_1_knk[5]",
    "lamb_sp[1]",
    "lamb_sp[2]",
    "tqi_av",
    "gear",
    "vs",
    "cam_sp_ivvt_in",
    "map_sp",
    "rfp_sp",
    "short term fuel trim - bank 1",
    "long term fuel trim - bank 1",
    "short term fuel trim - bank 2",
    "long term fuel trim - bank 2",
    "engine rpm",
    "ignition timing advance for #1 cylinder",
    "ambient air temperature",
    "commanded throttle actuator control",
];

/// Validated name-to-position registry for one export layout
#[derive(Clone, Debug)]
pub struct Schema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build the registry for the standard controller export
    pub fn new() -> Result<Self, SchemaError> {
        let schema = Self::from_names(COLUMN_NAMES.iter().map(|s| s.to_string()))?;

        // Every signal constant the analysis code uses must resolve
        let referenced = [
            signal::TIME,
            signal::THROTTLE,
            signal::TIMING,
            signal::ENGINE_RPM,
            signal::GEAR,
            signal::LAMBDA_BANK1,
            signal::MANIFOLD_PRESSURE,
            signal::AMBIENT_PRESSURE,
            signal::AMBIENT_TEMP,
            signal::PUMP_DUTY,
        ];
        for name in referenced.iter().chain(signal::KNOCK.iter()) {
            schema.index_of(name)?;
        }

        Ok(schema)
    }

    /// Build a registry from an arbitrary ordered vocabulary
    pub fn from_names<I, S>(names: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());

        for (pos, name) in names.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(SchemaError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names, index })
    }

    /// Resolve a signal name to its column position
    pub fn index_of(&self, name: &str) -> Result<usize, SchemaError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SchemaError::Unknown(name.to_string()))
    }

    /// Number of columns in the registry
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// All column names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
