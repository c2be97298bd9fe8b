//! Spell batches and their encoding into DSA `cast` arguments.
//!
//! A spell names a connector by display name and carries either a typed
//! [`ConnectorCall`] or a method name with dynamic ABI values. Encoding
//! resolves each name against the [`ConnectorRegistry`] for one chain and
//! produces the `(targetNames, datas)` pair `cast` takes, in batch order.

use alloy_dyn_abi::{DynSolValue, JsonAbiExt, Specifier};
use alloy_json_abi::Function;
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;

use crate::connectors::{ConnectorCall, ConnectorKind};
use crate::error::SpellError;
use crate::registry::{ConnectorRegistry, ConnectorRegistryEntry};
use crate::wallet::castCall;

/// What a spell invokes on its connector.
#[derive(Debug, Clone, PartialEq)]
pub enum SpellCall {
    Typed(ConnectorCall),
    /// Method name plus ABI values, matched against the connector's signatures
    /// by name and arity.
    Dynamic { method: String, args: Vec<DynSolValue> },
}

/// One connector invocation inside a `cast` batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub connector: String,
    pub call: SpellCall,
}

impl Spell {
    pub fn typed(connector: impl Into<String>, call: ConnectorCall) -> Self {
        Spell {
            connector: connector.into(),
            call: SpellCall::Typed(call),
        }
    }

    pub fn dynamic(
        connector: impl Into<String>,
        method: impl Into<String>,
        args: Vec<DynSolValue>,
    ) -> Self {
        Spell {
            connector: connector.into(),
            call: SpellCall::Dynamic {
                method: method.into(),
                args,
            },
        }
    }

    /// Method name for logs and errors.
    pub fn method(&self) -> String {
        match &self.call {
            SpellCall::Typed(call) => call
                .signature()
                .and_then(|sig| sig.split('(').next())
                .unwrap_or("?")
                .to_string(),
            SpellCall::Dynamic { method, .. } => method.clone(),
        }
    }
}

/// The two parallel arrays a DSA `cast` consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedSpellBatch {
    pub targets: Vec<String>,
    pub datas: Vec<Bytes>,
}

impl EncodedSpellBatch {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Calldata for `cast(targets, datas, origin)` on the DSA account.
    pub fn cast_calldata(&self, origin: Address) -> Bytes {
        castCall {
            targetNames: self.targets.clone(),
            datas: self.datas.clone(),
            origin,
        }
        .abi_encode()
        .into()
    }

    /// Recover the batch from `cast` calldata.
    pub fn from_cast_calldata(data: &[u8]) -> Result<(Self, Address), SpellError> {
        let call = castCall::abi_decode(data).map_err(|e| SpellError::Decoding(e.to_string()))?;
        if call.targetNames.len() != call.datas.len() {
            return Err(SpellError::Decoding(format!(
                "{} targets but {} payloads",
                call.targetNames.len(),
                call.datas.len()
            )));
        }
        Ok((
            EncodedSpellBatch {
                targets: call.targetNames,
                datas: call.datas,
            },
            call.origin,
        ))
    }
}

/// A payload decoded back against its connector ABI.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSpell {
    pub connector: String,
    pub signature: String,
    pub args: Vec<DynSolValue>,
}

/// Encodes spells for a single chain.
#[derive(Debug, Clone, Copy)]
pub struct SpellEncoder<'a> {
    registry: &'a ConnectorRegistry,
    chain_id: u64,
}

impl<'a> SpellEncoder<'a> {
    pub fn new(registry: &'a ConnectorRegistry, chain_id: u64) -> Self {
        SpellEncoder { registry, chain_id }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Encode a batch. The first failing spell aborts the whole batch.
    pub fn encode(&self, spells: &[Spell]) -> Result<EncodedSpellBatch, SpellError> {
        if spells.is_empty() {
            return Err(SpellError::EmptyBatch);
        }
        let mut batch = EncodedSpellBatch {
            targets: Vec::with_capacity(spells.len()),
            datas: Vec::with_capacity(spells.len()),
        };
        for spell in spells {
            let data = self.encode_one(spell)?;
            batch.targets.push(spell.connector.clone());
            batch.datas.push(data.into());
        }
        Ok(batch)
    }

    fn encode_one(&self, spell: &Spell) -> Result<Vec<u8>, SpellError> {
        let entry = self.registry.resolve(self.chain_id, &spell.connector)?;
        let kind = kind_of(entry)?;
        match &spell.call {
            SpellCall::Typed(call) => {
                if call.kind() != kind {
                    return Err(SpellError::encoding(
                        &spell.connector,
                        spell.method(),
                        format!(
                            "call built for {} but connector is {}",
                            call.kind().artifact(),
                            entry.artifact
                        ),
                    ));
                }
                Ok(call.abi_encode())
            }
            SpellCall::Dynamic { method, args } => {
                let candidates = functions_named(kind, &spell.connector, method)?;
                let mut last_err = None;
                for function in candidates.iter().filter(|f| f.inputs.len() == args.len()) {
                    match function.abi_encode_input(args) {
                        Ok(data) => return Ok(data),
                        Err(e) => last_err = Some(e.to_string()),
                    }
                }
                let reason = last_err.unwrap_or_else(|| {
                    let arities: Vec<String> =
                        candidates.iter().map(|f| f.inputs.len().to_string()).collect();
                    format!("expected {} arguments, got {}", arities.join(" or "), args.len())
                });
                Err(SpellError::encoding(&spell.connector, method, reason))
            }
        }
    }

    /// Build a dynamic spell from string arguments, coercing each one to the
    /// parameter type of the matching method. Numbers are decimal or hex,
    /// arrays are `[a,b]` and tuples are `(a,b)`.
    pub fn parse_spell(
        &self,
        connector: &str,
        method: &str,
        args: &[&str],
    ) -> Result<Spell, SpellError> {
        let entry = self.registry.resolve(self.chain_id, connector)?;
        let kind = kind_of(entry)?;
        let candidates = functions_named(kind, connector, method)?;
        let mut last_err = format!("no overload of {method} takes {} arguments", args.len());
        for function in candidates.iter().filter(|f| f.inputs.len() == args.len()) {
            match coerce_args(function, args) {
                Ok(values) => return Ok(Spell::dynamic(connector, method, values)),
                Err(e) => last_err = e,
            }
        }
        Err(SpellError::encoding(connector, method, last_err))
    }

    /// Decode every payload of a batch against its connector's ABI.
    pub fn decode(&self, batch: &EncodedSpellBatch) -> Result<Vec<DecodedSpell>, SpellError> {
        if batch.targets.len() != batch.datas.len() {
            return Err(SpellError::Decoding(format!(
                "{} targets but {} payloads",
                batch.targets.len(),
                batch.datas.len()
            )));
        }
        batch
            .targets
            .iter()
            .zip(&batch.datas)
            .map(|(connector, data)| self.decode_one(connector, data))
            .collect()
    }

    fn decode_one(&self, connector: &str, data: &[u8]) -> Result<DecodedSpell, SpellError> {
        let entry = self.registry.resolve(self.chain_id, connector)?;
        let kind = kind_of(entry)?;
        if data.len() < 4 {
            return Err(SpellError::Decoding(format!(
                "{connector}: payload shorter than a selector"
            )));
        }
        for signature in kind.signatures() {
            let function = parse_signature(signature)?;
            if function.selector().as_slice() != &data[..4] {
                continue;
            }
            let args = function
                .abi_decode_input(&data[4..])
                .map_err(|e| SpellError::Decoding(format!("{connector}.{}: {e}", function.name)))?;
            return Ok(DecodedSpell {
                connector: connector.to_string(),
                signature: signature.to_string(),
                args,
            });
        }
        Err(SpellError::Decoding(format!(
            "{connector}: selector 0x{} is not a method of {}",
            hex::encode(&data[..4]),
            entry.artifact
        )))
    }
}

fn kind_of(entry: &ConnectorRegistryEntry) -> Result<ConnectorKind, SpellError> {
    entry.kind().ok_or_else(|| SpellError::UnknownArtifact {
        connector: entry.name.clone(),
        artifact: entry.artifact.clone(),
    })
}

fn parse_signature(signature: &str) -> Result<Function, SpellError> {
    Function::parse(signature).map_err(|e| SpellError::Decoding(format!("{signature}: {e}")))
}

fn functions_named(
    kind: ConnectorKind,
    connector: &str,
    method: &str,
) -> Result<Vec<Function>, SpellError> {
    let mut functions = Vec::new();
    for signature in kind.signatures() {
        if signature.split('(').next() == Some(method) {
            functions.push(parse_signature(signature)?);
        }
    }
    if functions.is_empty() {
        return Err(SpellError::UnknownMethod {
            connector: connector.to_string(),
            method: method.to_string(),
        });
    }
    Ok(functions)
}

fn coerce_args(function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, String> {
    function
        .inputs
        .iter()
        .zip(args)
        .enumerate()
        .map(|(i, (param, arg))| {
            let ty = param.resolve().map_err(|e| e.to_string())?;
            ty.coerce_str(arg)
                .map_err(|e| format!("argument {i} ({}): {e}", ty.sol_type_name()))
        })
        .collect()
}
