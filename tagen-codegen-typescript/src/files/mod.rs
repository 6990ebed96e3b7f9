mod declaration_ts;

pub use declaration_ts::DeclarationTs;
