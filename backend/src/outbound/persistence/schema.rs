//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Submitted complaints, one row per ticket.
    complaints (id) {
        /// Surrogate key assigned by the database.
        id -> Int8,
        /// Submitter address (max 100 characters).
        email -> Varchar,
        /// Free-form complaint text.
        complaint -> Text,
        /// Six-symbol ticket number; unique.
        ticket_number -> Varchar,
        /// `pending` or `resolved`.
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
