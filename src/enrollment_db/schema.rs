table! {
    students (id) {
        id -> BigInt,

        name -> Text,
        email -> Text,
        phone -> Text,
        course -> Text,

        fees_total -> BigInt,
        fees_paid -> BigInt,
        date -> Date,
    }
}
