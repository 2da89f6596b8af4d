use super::introspection::*;
use super::schema::*;
use crate::ast::{ASTContext, OperationKind};
use log::debug;

mod private {
    use super::*;

    pub(super) fn build_type_ref<'a>(
        ctx: &'a ASTContext,
        type_ref: &IntrospectionTypeRef,
    ) -> TypeRef<'a> {
        match type_ref {
            IntrospectionTypeRef::List { of_type } => {
                TypeRef::ListType(ctx.alloc(build_type_ref(ctx, of_type)))
            }
            IntrospectionTypeRef::NonNull { of_type } => {
                TypeRef::NonNullType(ctx.alloc(build_type_ref(ctx, of_type)))
            }
            IntrospectionTypeRef::Scalar { name } => TypeRef::Type(ctx.alloc_str(name)),
        }
    }

    fn build_input_field<'a>(
        ctx: &'a ASTContext,
        value: &IntrospectionInputValue,
    ) -> SchemaInputField<'a> {
        SchemaInputField::new(ctx.alloc_str(value.name), build_type_ref(ctx, &value.of_type))
    }

    fn build_field<'a>(ctx: &'a ASTContext, field: &IntrospectionField) -> SchemaField<'a> {
        let mut schema_field = SchemaField::new(
            ctx,
            ctx.alloc_str(field.name),
            build_type_ref(ctx, &field.of_type),
        );
        for arg in field.args.iter() {
            schema_field.add_argument(build_input_field(ctx, arg));
        }
        schema_field
    }

    /// Converts an introspected node into its schema counterpart, copying all names into the arena.
    pub(super) trait BuildSchemaType<'a, T>: Sized {
        fn on_create(&self, ctx: &'a ASTContext) -> T;
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaType<'a>> for IntrospectionType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaType<'a> {
            match self {
                IntrospectionType::Scalar(scalar) => {
                    SchemaType::Scalar(ctx.alloc(SchemaScalar::new(ctx.alloc_str(scalar.name))))
                }
                IntrospectionType::Object(object) => {
                    SchemaType::Object(ctx.alloc(object.on_create(ctx)))
                }
                IntrospectionType::Interface(interface) => {
                    SchemaType::Interface(ctx.alloc(interface.on_create(ctx)))
                }
                IntrospectionType::Union(union_type) => {
                    SchemaType::Union(ctx.alloc(union_type.on_create(ctx)))
                }
                IntrospectionType::Enum(enum_type) => {
                    SchemaType::Enum(ctx.alloc(enum_type.on_create(ctx)))
                }
                IntrospectionType::InputObject(input_object) => {
                    SchemaType::InputObject(ctx.alloc(input_object.on_create(ctx)))
                }
            }
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaObject<'a>> for IntrospectionObjectType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaObject<'a> {
            let mut object = SchemaObject::new(ctx, ctx.alloc_str(self.name));
            for field in self.fields.iter() {
                object.add_field(ctx, build_field(ctx, field));
            }
            for interface in self.interfaces.iter() {
                object.add_interface(ctx.alloc_str(interface.name));
            }
            object
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaInterface<'a>> for IntrospectionInterfaceType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaInterface<'a> {
            let mut interface = SchemaInterface::new(ctx, ctx.alloc_str(self.name));
            for field in self.fields.iter() {
                interface.add_field(ctx, build_field(ctx, field));
            }
            for implemented in self.interfaces.iter() {
                interface.add_interface(ctx.alloc_str(implemented.name));
            }
            for possible_type in self.possible_types.iter() {
                interface.add_possible_type(ctx.alloc_str(possible_type.name));
            }
            interface
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaUnion<'a>> for IntrospectionUnionType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaUnion<'a> {
            let mut union_type = SchemaUnion::new(ctx, ctx.alloc_str(self.name));
            for possible_type in self.possible_types.iter() {
                union_type.add_possible_type(ctx.alloc_str(possible_type.name));
            }
            union_type
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaEnum<'a>> for IntrospectionEnumType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaEnum<'a> {
            let mut enum_type = SchemaEnum::new(ctx, ctx.alloc_str(self.name));
            for value in self.enum_values.iter() {
                enum_type.add_value(ctx.alloc_str(value.name));
            }
            enum_type
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaInputObject<'a>> for IntrospectionInputObjectType<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaInputObject<'a> {
            let mut input = SchemaInputObject::new(ctx, ctx.alloc_str(self.name));
            for field in self.input_fields.iter() {
                input.add_field(build_input_field(ctx, field));
            }
            input
        }
    }

    impl<'a, 'i> BuildSchemaType<'a, SchemaDirective<'a>> for IntrospectionDirective<'i> {
        fn on_create(&self, ctx: &'a ASTContext) -> SchemaDirective<'a> {
            let mut directive = SchemaDirective::new(ctx, ctx.alloc_str(self.name));
            for arg in self.args.iter() {
                directive.add_argument(build_input_field(ctx, arg));
            }
            directive
        }
    }
}

use private::BuildSchemaType;

/// Trait for converting introspection data into a [Schema] that's allocated on an
/// [`ASTContext`].
pub trait BuildClientSchema<'a> {
    /// Converts the introspected data to a [Schema].
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a>;
}

impl<'a, 'i> BuildClientSchema<'a> for IntrospectionSchema<'i> {
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a> {
        let mut schema = Schema::new(ctx);
        for introspection_type in self.types.iter() {
            schema.add_type(introspection_type.on_create(ctx));
        }
        for directive in self.directives.iter() {
            schema.add_directive(ctx.alloc(directive.on_create(ctx)));
        }
        if let Some(query_type) = &self.query_type {
            schema.set_root_type(OperationKind::Query, ctx.alloc_str(query_type.name));
        }
        if let Some(mutation_type) = &self.mutation_type {
            schema.set_root_type(OperationKind::Mutation, ctx.alloc_str(mutation_type.name));
        }
        debug!(
            "Built client schema with {} types and {} directives",
            schema.types.len(),
            schema.directives.len()
        );
        ctx.alloc(schema)
    }
}

impl<'a, 'i> BuildClientSchema<'a> for IntrospectionQuery<'i> {
    #[inline]
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a> {
        self.schema.build_client_schema(ctx)
    }
}
