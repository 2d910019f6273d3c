use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape document is not valid XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("shape document has no <svg> root element")]
    MissingSvgRoot,
}
