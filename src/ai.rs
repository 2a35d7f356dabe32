// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client for the external AI analysis service. The service is an opaque
//! collaborator: we post the current record sets and print back whatever
//! it returns. A fetch failure is surfaced as an error and no report is
//! assembled from partial input.

use crate::models::{Budget, Debt, Transaction};
use crate::utils::http_client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize)]
struct AnalysisRequest<'a> {
    user_id: &'a str,
    transactions: &'a [Transaction],
    budgets: &'a [Budget],
    debts: &'a [Debt],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    #[serde(default)]
    pub predictions: serde_json::Value,
    #[serde(default)]
    pub anomalies: serde_json::Value,
    #[serde(default)]
    pub recommendations: serde_json::Value,
    #[serde(default)]
    pub summary: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub user_id: String,
    #[serde(default)]
    pub analysis_date: Option<String>,
    pub results: AnalysisResults,
}

pub fn financial_analysis(
    base_url: &str,
    user_id: &str,
    transactions: &[Transaction],
    budgets: &[Budget],
    debts: &[Debt],
) -> Result<AnalysisReport> {
    let client = http_client()?;
    let url = format!("{}/financial-analysis", base_url.trim_end_matches('/'));
    let resp = client
        .post(&url)
        .json(&AnalysisRequest {
            user_id,
            transactions,
            budgets,
            debts,
        })
        .send()
        .with_context(|| format!("AI service unreachable at {}", url))?
        .error_for_status()
        .context("AI service returned an error status")?;
    let report: AnalysisReport = resp.json().context("Malformed AI service response")?;
    Ok(report)
}
