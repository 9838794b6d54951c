use crate::domain::AppError;

/// Read-only source of templates and manifest fragments.
pub trait AssetSource {
    /// Read an asset such as `templates/chnserver.env.tmpl` or `compose/chnserver.yml`.
    fn read_asset(&self, path: &str) -> Result<String, AppError>;
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn read_asset(&self, path: &str) -> Result<String, AppError> {
        (**self).read_asset(path)
    }
}
