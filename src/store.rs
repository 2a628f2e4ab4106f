use crate::compare::{compare_against_previous, ComparisonOutcome};
use crate::errors::AppError;
use crate::models::{
    AppData, Client, CreateClientRequest, CreateRecordRequest, DailyRecord, SearchQuery,
    UpdateClientRequest, UpdateRecordRequest,
};
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl AppData {
    /// Clients in creation order (vector order is insertion order).
    pub fn list_clients(&self) -> Vec<Client> {
        self.clients.clone()
    }

    pub fn create_client(&mut self, req: CreateClientRequest) -> Client {
        let now = now_rfc3339();
        let client = Client {
            id: new_id(),
            name: req.name,
            avatar: req.avatar,
            created_at: now.clone(),
            updated_at: now,
        };
        self.clients.push(client.clone());
        client
    }

    pub fn update_client(
        &mut self,
        id: &str,
        req: UpdateClientRequest,
    ) -> Result<Client, AppError> {
        let client = self
            .clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or_else(|| AppError::not_found("Client not found"))?;

        if let Some(name) = req.name {
            client.name = name;
        }
        if let Some(avatar) = req.avatar {
            client.avatar = avatar;
        }
        client.updated_at = now_rfc3339();
        Ok(client.clone())
    }

    /// Deleting a client also deletes every record it owns.
    pub fn delete_client(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.clients.len();
        self.clients.retain(|client| client.id != id);
        if self.clients.len() == before {
            return Err(AppError::not_found("Client not found"));
        }
        self.records.retain(|record| record.client_id != id);
        Ok(())
    }

    /// Records for one client, newest date first. Same-date records keep the
    /// most recently created one first.
    pub fn list_records(&self, client_id: &str) -> Vec<DailyRecord> {
        let mut records: Vec<DailyRecord> = self
            .records
            .iter()
            .rev()
            .filter(|record| record.client_id == client_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    pub fn create_record(&mut self, client_id: &str, req: CreateRecordRequest) -> DailyRecord {
        let comparison =
            match compare_against_previous(&self.records, client_id, &req.date, req.regular_candles)
            {
                ComparisonOutcome::Computed(label) => label,
                ComparisonOutcome::Skipped(cause) => {
                    // Never fail creation over a comparison problem.
                    warn!("comparison skipped for client {client_id}: {cause}");
                    String::new()
                }
            };

        let now = now_rfc3339();
        let record = DailyRecord {
            id: new_id(),
            client_id: client_id.to_string(),
            date: req.date,
            regular_candles: req.regular_candles,
            regular_candles_comparison: comparison,
            seasonal_candles: req.seasonal_candles,
            online_time: req.online_time,
            actual_duration: req.actual_duration,
            notes: req.notes,
            created_at: now.clone(),
            updated_at: now,
        };
        self.records.push(record.clone());
        record
    }

    /// Edits never recompute the stored comparison, even when the date or the
    /// regular count changes.
    pub fn update_record(
        &mut self,
        id: &str,
        req: UpdateRecordRequest,
    ) -> Result<DailyRecord, AppError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| AppError::not_found("Record not found"))?;

        if let Some(date) = req.date {
            record.date = date;
        }
        if let Some(regular) = req.regular_candles {
            record.regular_candles = regular;
        }
        if let Some(seasonal) = req.seasonal_candles {
            record.seasonal_candles = seasonal;
        }
        if let Some(online_time) = req.online_time {
            record.online_time = Some(online_time);
        }
        if let Some(duration) = req.actual_duration {
            record.actual_duration = Some(duration);
        }
        if let Some(notes) = req.notes {
            record.notes = notes;
        }
        record.updated_at = now_rfc3339();
        Ok(record.clone())
    }

    pub fn delete_record(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Err(AppError::not_found("Record not found"));
        }
        Ok(())
    }

    /// Inclusive on both bounds; ISO date strings compare correctly as text.
    pub fn list_records_in_range(
        &self,
        client_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Vec<DailyRecord> {
        self.list_records(client_id)
            .into_iter()
            .filter(|record| record.date.as_str() >= start_date && record.date.as_str() <= end_date)
            .collect()
    }

    /// The date range only applies when both bounds are present; candle
    /// bounds apply independently.
    pub fn search_records(&self, client_id: &str, query: &SearchQuery) -> Vec<DailyRecord> {
        let mut records = match (&query.start_date, &query.end_date) {
            (Some(start), Some(end)) => self.list_records_in_range(client_id, start, end),
            _ => self.list_records(client_id),
        };

        if let Some(min) = query.min_candles {
            records.retain(|record| record.regular_candles >= min);
        }
        if let Some(max) = query.max_candles {
            records.retain(|record| record.regular_candles <= max);
        }
        records
    }

    /// Demo dataset for a fresh process with no data file yet, mirroring the
    /// hosted instance's fixtures.
    pub fn seed_demo_data(&mut self) {
        let today = Utc::now().date_naive();
        let yesterday = (today - chrono::Duration::days(1)).to_string();
        let day_before = (today - chrono::Duration::days(2)).to_string();

        let star = self.create_client(CreateClientRequest {
            name: "Star".to_string(),
            avatar: "🌟".to_string(),
        });
        let moon = self.create_client(CreateClientRequest {
            name: "Moonlight".to_string(),
            avatar: "🌙".to_string(),
        });
        self.create_client(CreateClientRequest {
            name: "Cloud".to_string(),
            avatar: "☁️".to_string(),
        });

        self.create_record(
            &star.id,
            CreateRecordRequest {
                date: day_before.clone(),
                regular_candles: 19,
                seasonal_candles: 3,
                online_time: Some("19:45".to_string()),
                actual_duration: Some(38),
                notes: "All dailies done".to_string(),
            },
        );
        self.create_record(
            &star.id,
            CreateRecordRequest {
                date: yesterday.clone(),
                regular_candles: 22,
                seasonal_candles: 4,
                online_time: Some("20:30".to_string()),
                actual_duration: Some(45),
                notes: "Extra seasonal candles on top of dailies".to_string(),
            },
        );
        self.create_record(
            &moon.id,
            CreateRecordRequest {
                date: yesterday,
                regular_candles: 18,
                seasonal_candles: 2,
                online_time: Some("21:15".to_string()),
                actual_duration: Some(42),
                notes: String::new(),
            },
        );
    }
}
