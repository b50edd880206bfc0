/// A photo received from the dashboard upload form.
#[derive(Clone, Debug)]
pub struct PhotoUpload {
    /// Filename as submitted by the browser
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
