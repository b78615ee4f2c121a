//! Types shared between the article generator UI and the Generation Service.

pub mod usecases;
