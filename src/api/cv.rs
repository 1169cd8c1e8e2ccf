use std::path::Path;

use folio_common::{paths, Error, Result};
use reqwest::Method;

use super::upload::FileUpload;
use super::ApiClient;

const CV_PATH: &str = "/cv/";
const CV_DOWNLOAD_PATH: &str = "/cv/download";

impl ApiClient {
    /// Whether a CV is available for download. Any failure counts as no.
    pub async fn cv_available(&self) -> bool {
        let builder = self.request(Method::GET, CV_DOWNLOAD_PATH);
        match self.send(builder, &Method::GET, CV_DOWNLOAD_PATH).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("CV not available: {}", e);
                false
            }
        }
    }

    pub async fn download_cv(&self) -> Result<Vec<u8>> {
        let builder = self.request(Method::GET, CV_DOWNLOAD_PATH);
        let response = self.send(builder, &Method::GET, CV_DOWNLOAD_PATH).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("reading CV: {e}")))?;
        Ok(bytes.to_vec())
    }

    /// Replace the CV. Only PDF files are accepted.
    pub async fn upload_cv(&self, file: FileUpload) -> Result<()> {
        if !paths::is_pdf_file(Path::new(&file.file_name)) {
            return Err(Error::invalid_input(format!(
                "CV must be a PDF file, got {}",
                file.file_name
            )));
        }
        self.require_token()?;

        let name = file.file_name.clone();
        self.send_multipart_unit(CV_PATH, file.into_form()?).await?;
        tracing::info!("Uploaded CV {}", name);
        Ok(())
    }

    pub async fn delete_cv(&self) -> Result<()> {
        self.require_token()?;
        self.send_unit::<()>(Method::DELETE, CV_PATH, None).await?;
        tracing::info!("Deleted CV");
        Ok(())
    }
}
