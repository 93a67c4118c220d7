use crate::token::TokenKind as K;
use super::{n, t, Nonterm, Nonterm::*, Symbol};

/// Productions of the built-in grammar, in table-construction order.
pub(super) fn rules() -> Vec<(Nonterm, Vec<Symbol>)> {
  vec![
    (Program, vec![n(DeclList)]),

    (DeclList, vec![n(Decl), n(DeclList)]),
    (DeclList, vec![]),

    (Decl, vec![n(TypeSpec), t(K::Identifier), n(DeclAfterId)]),

    (TypeSpec, vec![t(K::KwInt)]),
    (TypeSpec, vec![t(K::KwChar)]),
    (TypeSpec, vec![t(K::KwVoid)]),
    (TypeSpec, vec![t(K::KwDouble)]),

    (DeclAfterId, vec![t(K::Semicolon)]),
    (DeclAfterId, vec![t(K::Assign), n(Expr), t(K::Semicolon)]),
    (DeclAfterId, vec![t(K::LParen), n(ParamClause), t(K::RParen), n(CompoundStmt)]),

    (ParamClause, vec![t(K::KwVoid)]),
    (ParamClause, vec![n(ParamList)]),
    (ParamClause, vec![]),

    (ParamList, vec![n(Param), n(ParamListTail)]),

    (ParamListTail, vec![t(K::Comma), n(Param), n(ParamListTail)]),
    (ParamListTail, vec![]),

    (Param, vec![n(ParamTypeSpec), t(K::Identifier)]),

    // `void` is not a parameter type
    (ParamTypeSpec, vec![t(K::KwInt)]),
    (ParamTypeSpec, vec![t(K::KwChar)]),
    (ParamTypeSpec, vec![t(K::KwDouble)]),

    (CompoundStmt, vec![t(K::LBrace), n(LocalDecls), n(StmtList), t(K::RBrace)]),

    (LocalDecls, vec![n(LocalDecl), n(LocalDecls)]),
    (LocalDecls, vec![]),

    (LocalDecl, vec![n(TypeSpec), t(K::Identifier), n(LocalInitOpt), t(K::Semicolon)]),

    (LocalInitOpt, vec![t(K::Assign), n(Expr)]),
    (LocalInitOpt, vec![]),

    (StmtList, vec![n(Stmt), n(StmtList)]),
    (StmtList, vec![]),

    (Stmt, vec![n(CompoundStmt)]),
    (Stmt, vec![n(IfStmt)]),
    (Stmt, vec![n(WhileStmt)]),
    (Stmt, vec![n(ForStmt)]),
    (Stmt, vec![n(ReturnStmt)]),
    (Stmt, vec![n(ExprStmt)]),

    (IfStmt, vec![t(K::KwIf), t(K::LParen), n(Expr), t(K::RParen), n(Stmt), n(ElseOpt)]),

    // dangling else: the table keeps `kw_else Stmt` on `kw_else`
    (ElseOpt, vec![t(K::KwElse), n(Stmt)]),
    (ElseOpt, vec![]),

    (WhileStmt, vec![t(K::KwWhile), t(K::LParen), n(Expr), t(K::RParen), n(Stmt)]),

    (ForStmt, vec![
      t(K::KwFor), t(K::LParen),
      n(ExprOpt), t(K::Semicolon), n(ExprOpt), t(K::Semicolon), n(ExprOpt),
      t(K::RParen), n(Stmt),
    ]),

    (ExprOpt, vec![n(Expr)]),
    (ExprOpt, vec![]),

    (ReturnStmt, vec![t(K::KwReturn), n(ReturnExprOpt), t(K::Semicolon)]),

    (ReturnExprOpt, vec![n(Expr)]),
    (ReturnExprOpt, vec![]),

    (ExprStmt, vec![n(Expr), t(K::Semicolon)]),

    (Expr, vec![n(Assignment)]),

    // right associative
    (Assignment, vec![n(LogicalOr), n(AssignmentTail)]),
    (AssignmentTail, vec![t(K::Assign), n(Assignment)]),
    (AssignmentTail, vec![]),

    (LogicalOr, vec![n(LogicalAnd), n(LogicalOrTail)]),
    (LogicalOrTail, vec![t(K::LogicalOr), n(LogicalAnd), n(LogicalOrTail)]),
    (LogicalOrTail, vec![]),

    (LogicalAnd, vec![n(Equality), n(LogicalAndTail)]),
    (LogicalAndTail, vec![t(K::LogicalAnd), n(Equality), n(LogicalAndTail)]),
    (LogicalAndTail, vec![]),

    (Equality, vec![n(Relational), n(EqualityTail)]),
    (EqualityTail, vec![t(K::Equal), n(Relational), n(EqualityTail)]),
    (EqualityTail, vec![t(K::NotEq), n(Relational), n(EqualityTail)]),
    (EqualityTail, vec![]),

    (Relational, vec![n(Additive), n(RelationalTail)]),
    (RelationalTail, vec![t(K::Less), n(Additive), n(RelationalTail)]),
    (RelationalTail, vec![t(K::Greater), n(Additive), n(RelationalTail)]),
    (RelationalTail, vec![t(K::LessEq), n(Additive), n(RelationalTail)]),
    (RelationalTail, vec![t(K::GreaterEq), n(Additive), n(RelationalTail)]),
    (RelationalTail, vec![]),

    (Additive, vec![n(Multiplicative), n(AdditiveTail)]),
    (AdditiveTail, vec![t(K::Plus), n(Multiplicative), n(AdditiveTail)]),
    (AdditiveTail, vec![t(K::Minus), n(Multiplicative), n(AdditiveTail)]),
    (AdditiveTail, vec![]),

    (Multiplicative, vec![n(Unary), n(MultiplicativeTail)]),
    (MultiplicativeTail, vec![t(K::Star), n(Unary), n(MultiplicativeTail)]),
    (MultiplicativeTail, vec![t(K::Slash), n(Unary), n(MultiplicativeTail)]),
    (MultiplicativeTail, vec![t(K::Percent), n(Unary), n(MultiplicativeTail)]),
    (MultiplicativeTail, vec![]),

    (Unary, vec![n(UnaryOp), n(Unary)]),
    (Unary, vec![n(Primary)]),

    (UnaryOp, vec![t(K::Plus)]),
    (UnaryOp, vec![t(K::Minus)]),
    (UnaryOp, vec![t(K::Star)]),
    (UnaryOp, vec![t(K::Not)]),

    (Primary, vec![t(K::IntLiteral)]),
    (Primary, vec![t(K::CharLiteral)]),
    (Primary, vec![t(K::DoubleLiteral)]),
    (Primary, vec![t(K::Identifier), n(PrimaryAfterId)]),
    (Primary, vec![t(K::LParen), n(Expr), t(K::RParen)]),

    // call or plain variable
    (PrimaryAfterId, vec![t(K::LParen), n(ArgListOpt), t(K::RParen)]),
    (PrimaryAfterId, vec![]),

    (ArgListOpt, vec![n(Expr), n(ArgListTail)]),
    (ArgListOpt, vec![]),

    (ArgListTail, vec![t(K::Comma), n(Expr), n(ArgListTail)]),
    (ArgListTail, vec![]),
  ]
}
