//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, one row per task, keyed by a serial identifier.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Lifecycle status stored under its canonical upper-case name.
        #[max_length = 20]
        status -> Varchar,
        /// Due date, no time component.
        due_date -> Date,
        /// Creation date stamped by the service.
        creation_date -> Date,
    }
}
