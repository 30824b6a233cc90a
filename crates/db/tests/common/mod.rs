//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use cdi_db::models::note::{CreateNote, Note};
use cdi_db::models::suggestion::CreateSuggestion;
use cdi_db::repositories::NoteRepo;
use sqlx::PgPool;

pub fn note_request(id: &str, patient_name: &str) -> CreateNote {
    CreateNote {
        id: Some(id.to_string()),
        patient_id: Some(format!("P-{id}")),
        patient_name: Some(patient_name.to_string()),
        note_type: Some("Discharge Summary".to_string()),
        department: Some("Cardiology".to_string()),
        admission_date: Some("2024-06-15".to_string()),
        discharge_date: Some("2024-06-18".to_string()),
        content: Some("DISCHARGE SUMMARY\n\nChief complaint: chest pain.".to_string()),
        ..Default::default()
    }
}

pub fn suggestion_request(revenue_impact: f64) -> CreateSuggestion {
    CreateSuggestion {
        suggestion_type: "Specificity".to_string(),
        category: "Diagnosis Specificity".to_string(),
        description: "Specify type of heart failure".to_string(),
        original_text: "heart failure".to_string(),
        suggested_text: "acute on chronic systolic heart failure".to_string(),
        reasoning: "Acuity and type change the DRG.".to_string(),
        revenue_impact: Some(revenue_impact),
        confidence: Some(0.9),
        ..Default::default()
    }
}

pub async fn create_note(pool: &PgPool, req: CreateNote) -> Note {
    let new = req.prepare().expect("fixture note must be valid");
    NoteRepo::create(pool, &new).await.expect("create note")
}
