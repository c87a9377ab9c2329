//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

mnemonic_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant, which is why it is the default.
    ///
    /// See [RFC 1034] for the introduction of classes.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    =>
    Class;

    /// Internet (IN).
    (In => "IN")

    /// Chaosnet (CH).
    ///
    /// Reused by BIND for built-in server information zones.
    (Ch => "CH")

    /// Hesiod (HS).
    (Hs => "HS")
}

impl Default for Class {
    fn default() -> Self {
        Class::In
    }
}

//============ Tests =========================================================
