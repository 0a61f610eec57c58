use crate::errors::AppResult;

/// A text file uploaded through the form, held only for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
    pub text: String,
}

impl UploadedDocument {
    /// Decodes the upload as strict UTF-8. Invalid sequences are an error,
    /// never replaced.
    pub fn from_upload(file_name: Option<String>, bytes: Vec<u8>) -> AppResult<Self> {
        let text = String::from_utf8(bytes.clone())?;
        Ok(Self {
            file_name,
            bytes,
            text,
        })
    }
}
