//! CLI Command Implementations
//!
//! Each command renders its output to a string; `main` prints it.

use std::path::Path;

use log::info;

use crate::config::ReductionConfig;
use crate::error::Result;
use crate::format::to_latex;
use crate::model::Model;
use crate::reduction::Method;

/// Build a model from CLI values, filling absent lists from [`Model::default`].
pub fn build_model(gain: f64, delay: f64, zeros: Option<&[f64]>, poles: Option<&[f64]>) -> Model {
    let defaults = Model::default();
    let zeros = zeros.unwrap_or(defaults.zeros()).to_vec();
    let poles = poles.unwrap_or(defaults.poles()).to_vec();

    Model::new(gain, delay, zeros, poles)
}

/// Load the reduction config, or use defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ReductionConfig> {
    match path {
        Some(path) => {
            info!("Loading reduction config: {}", path.display());
            ReductionConfig::load(path)
        }
        None => Ok(ReductionConfig::default()),
    }
}

/// Render the model unchanged.
pub fn show(model: &Model, latex: bool) -> String {
    render(model, latex)
}

/// Render the FOPDT approximation.
pub fn fopdt(model: &Model, method: Method, config: &ReductionConfig, latex: bool) -> Result<String> {
    info!("FOPDT ({:?}) of a {}-pole model", method, model.order());

    let reduced = model.fopdt_with(method, config)?;
    Ok(render(&reduced, latex))
}

/// Render the SOPDT approximation.
pub fn sopdt(model: &Model, config: &ReductionConfig, latex: bool) -> Result<String> {
    info!("SOPDT of a {}-pole model", model.order());

    let reduced = model.sopdt_with(config)?;
    Ok(render(&reduced, latex))
}

/// Render the model followed by its general FOPDT and its SOPDT.
pub fn all(model: &Model, config: &ReductionConfig, latex: bool) -> Result<String> {
    let mut out = String::new();
    out.push_str(&show(model, latex));
    out.push_str(&fopdt(model, Method::General, config, latex)?);
    out.push_str(&sopdt(model, config, latex)?);
    Ok(out)
}

fn render(model: &Model, latex: bool) -> String {
    if latex {
        format!("{}\n", to_latex(model))
    } else {
        model.to_string()
    }
}
