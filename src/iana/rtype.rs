//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

mnemonic_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a type indicating what kind of information
    /// it holds. Only the types that can be written by the
    /// [`zonefile`][crate::zonefile] module are listed here.
    ///
    /// In order to avoid confusion over capitalization, the mnemonics are
    /// treated as single acronyms and therefore all variant names are
    /// spelled with an initial capital letter in accordance with the Rust
    /// naming guidelines.
    =>
    Rtype;

    /// A host address.
    (A => "A")

    /// An authoritative name server.
    (Ns => "NS")

    /// The canonical name for an alias.
    (Cname => "CNAME")

    /// Marks the start of a zone of authority.
    (Soa => "SOA")

    /// A domain name pointer.
    (Ptr => "PTR")

    /// Mail exchange.
    (Mx => "MX")

    /// Text strings.
    (Txt => "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (Aaaa => "AAAA")
}

//============ Tests =========================================================
