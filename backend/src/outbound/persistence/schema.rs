//! Diesel table definitions for the account schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Primary account records.
    ///
    /// `id` is a `BIGSERIAL`; callers may also insert explicit identifiers.
    accounts (id) {
        /// Primary key.
        id -> Int8,
        /// Account holder name.
        name -> Nullable<Varchar>,
        /// Contact email.
        email -> Nullable<Varchar>,
        /// Opaque account number.
        account_number -> Varchar,
        /// Free-form account type.
        account_type -> Nullable<Varchar>,
        /// Holder date of birth.
        dob -> Nullable<Date>,
        /// Bank routing code.
        bank_code -> Varchar,
    }
}
