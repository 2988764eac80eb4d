pub mod show_felt_report;
