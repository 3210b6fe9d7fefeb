//! Resume ingestion: PDF bytes → extracted text → S3 object → refreshed
//! passport, in one operation.

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::freelancers::store;
use crate::skills::extraction::extract_skills;
use crate::skills::passport::SkillPassport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeIngestResponse {
    pub freelancer_id: Uuid,
    pub resume_s3_key: String,
    pub extracted_chars: usize,
    pub detected_skills: Vec<String>,
    pub passport: SkillPassport,
}

pub async fn ingest_resume(
    state: &AppState,
    freelancer_id: Uuid,
    bytes: Bytes,
) -> Result<ResumeIngestResponse, ApiError> {
    // The row must exist before we pay for extraction or storage.
    store::get_freelancer(&state.db, freelancer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Freelancer {freelancer_id} not found")))?;

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| ApiError::Pdf(format!("Could not extract text from PDF: {e}")))?;
    if text.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Resume contains no extractable text".to_string(),
        ));
    }

    let resume_s3_key = format!("resumes/{}/{}.pdf", freelancer_id, Uuid::new_v4());
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&resume_s3_key)
        .body(ByteStream::from(bytes.to_vec()))
        .content_type("application/pdf")
        .send()
        .await
        .map_err(|e| ApiError::S3(format!("Resume upload failed: {e}")))?;

    info!(
        "Stored resume for freelancer {freelancer_id} at s3://{}/{}",
        state.config.s3_bucket, resume_s3_key
    );

    store::persist_resume(&state.db, freelancer_id, &text, &resume_s3_key).await?;

    let detected_skills = extract_skills(&text, &state.vocabulary);
    let passport = store::refresh_passport(&state.db, &state.vocabulary, freelancer_id).await?;

    Ok(ResumeIngestResponse {
        freelancer_id,
        resume_s3_key,
        extracted_chars: text.chars().count(),
        detected_skills,
        passport,
    })
}
