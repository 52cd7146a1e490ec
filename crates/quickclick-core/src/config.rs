/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (use `#[serde(default = "...")]`
/// for optional vars) and call `Config::from_env()` at startup. Field names
/// map to upper-cased env vars: `jwt_secret` reads `JWT_SECRET`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Same as [`Config::from_env`] but reads from an explicit key/value list.
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
