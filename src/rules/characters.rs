//! Character registry for the Gospel of Mark.
//!
//! Ordered (lemma, canonical display name) pairs covering the principal
//! persons and entities of the narrative. The matcher tests token lemmas for
//! exact equality against these entries in declaration order and attributes a
//! token to at most one entry (first match wins), so order here is the
//! matching order.

/// Target lemma → canonical display name, in matching order.
pub(crate) const REGISTRY: &[(&str, &str)] = &[
    ("Ἰησοῦς", "Jesus"),
    ("Χριστός", "Christ"),
    ("θεός", "God"),
    ("πνεῦμα", "Spirit"),
    ("Ἰωάννης", "John"),
    ("Σίμων", "Simon"),
    ("Πέτρος", "Peter"),
    ("Ἀνδρέας", "Andrew"),
    ("Ἰάκωβος", "James"),
    ("Ζεβεδαῖος", "Zebedee"),
    ("Φίλιππος", "Philip"),
    ("Βαρθολομαῖος", "Bartholomew"),
    ("Μαθθαῖος", "Matthew"),
    ("Θωμᾶς", "Thomas"),
    ("Ἰούδας", "Judas"),
    ("Μαρία", "Mary"),
    ("Ἡρῴδης", "Herod"),
    ("Ἡρῳδιάς", "Herodias"),
    ("Πιλᾶτος", "Pilate"),
    ("Βαραββᾶς", "Barabbas"),
    ("Σατανᾶς", "Satan"),
    ("Ἠλίας", "Elijah"),
    ("Μωϋσῆς", "Moses"),
    ("Δαυίδ", "David"),
    ("Ἠσαΐας", "Isaiah"),
    ("Φαρισαῖος", "Pharisees"),
    ("γραμματεύς", "Scribes"),
    ("ἀρχιερεύς", "Chief priests"),
    ("Σαδδουκαῖος", "Sadducees"),
    ("Καῖσαρ", "Caesar"),
];
